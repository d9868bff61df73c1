//! Visualization picker dialog component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;

/// Visualization catalog picker dialog component
pub struct VisualizationPickerDialog;

impl VisualizationPickerDialog {
    /// Render the visualization picker dialog
    pub fn render(f: &mut Frame, app: &App) {
        if !app.picking_visualization {
            return;
        }

        let dialog_area = LayoutManager::centered_rect(60, 60, f.area());
        f.render_widget(Clear, dialog_area);

        let items: Vec<ListItem> = app
            .catalog
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let selected = index == app.picker_index;
                let title_style = if selected {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(vec![
                    Line::styled(format!("{} {}", entry.icon, entry.title), title_style),
                    Line::styled(format!("   {}", entry.description), Style::default().fg(Color::DarkGray)),
                ])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("📊 Select Visualization")
                .title_alignment(Alignment::Center),
        );
        f.render_widget(list, dialog_area);
    }
}
