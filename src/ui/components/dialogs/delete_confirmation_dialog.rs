//! Delete confirmation dialog component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;

/// Section delete confirmation dialog component
pub struct DeleteConfirmationDialog;

impl DeleteConfirmationDialog {
    /// Render the delete confirmation dialog
    pub fn render(f: &mut Frame, app: &App) {
        if let Some(section_id) = &app.delete_confirmation {
            if let Some(section) = app.store.sections().iter().find(|s| &s.id == section_id) {
                let confirm_area = LayoutManager::centered_rect(60, 25, f.area());
                f.render_widget(Clear, confirm_area);

                // Truncate on char boundaries; titles can be multibyte
                let title_preview = if section.title.chars().count() > 40 {
                    let truncated: String = section.title.chars().take(37).collect();
                    format!("{truncated}...")
                } else {
                    section.title.clone()
                };

                let confirm_text = format!(
                    "Delete section?\n\n\"{title_preview}\"\n\nThis action cannot be undone!\n\nPress 'y' to confirm or 'n'/Esc to cancel",
                );

                let confirm_paragraph = Paragraph::new(confirm_text)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title("⚠️  Confirm Delete")
                            .title_alignment(Alignment::Center),
                    )
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true });
                f.render_widget(confirm_paragraph, confirm_area);
            }
        }
    }
}
