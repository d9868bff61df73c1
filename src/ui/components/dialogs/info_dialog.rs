//! Info dialog component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;

/// Informational message dialog component
pub struct InfoDialog;

impl InfoDialog {
    /// Render the info dialog
    pub fn render(f: &mut Frame, app: &App) {
        if let Some(message) = &app.info_message {
            let dialog_area = LayoutManager::centered_rect_lines(60, 7, f.area());
            f.render_widget(Clear, dialog_area);

            let text = format!("{message}\n\nPress Enter or Esc to dismiss");
            let paragraph = Paragraph::new(text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("ℹ️  Info")
                        .title_alignment(Alignment::Center),
                )
                .style(Style::default().fg(Color::Green))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, dialog_area);
        }
    }
}
