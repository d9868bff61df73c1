//! Status bar component

use ratatui::{
    prelude::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use super::super::app::App;

/// Single-line status bar with key hints
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, rect: Rect, app: &App) {
        let hints = if app.picking_visualization {
            "↑/↓ select  Enter add  Esc close".to_string()
        } else if app.editor.is_open() {
            "Tab switch field  Ctrl+v add viz  Ctrl+d remove viz  Enter save  Esc cancel".to_string()
        } else {
            let save_hint = if app.store.can_save() {
                "s save"
            } else {
                "s save (needs name + data source)"
            };
            format!("a add  e edit  d delete  J/K move  {save_hint}  q cancel  ? help")
        };

        let status = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
        f.render_widget(status, rect);
    }
}
