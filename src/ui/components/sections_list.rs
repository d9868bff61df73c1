//! Sections list component

use ratatui::{
    layout::Alignment,
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::config::DisplayConfig;

/// Ordered list of the template's sections
pub struct SectionsList;

impl SectionsList {
    /// Render the sections list pane
    pub fn render(f: &mut Frame, rect: Rect, app: &mut App, display: &DisplayConfig) {
        let sections = app.store.sections();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("📑 Sections ({})", sections.len()))
            .title_alignment(Alignment::Center);

        if sections.is_empty() {
            let empty = Paragraph::new("No sections yet. Press 'a' to add one.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(empty, rect);
            return;
        }

        let items: Vec<ListItem> = sections
            .iter()
            .map(|section| {
                let mut lines = vec![Line::from(section.title.clone())];
                if display.show_descriptions && !section.description.is_empty() {
                    lines.push(Line::styled(
                        format!("  {}", section.description),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                if display.show_visualization_counts {
                    let count = section.visualizations.len();
                    let plural = if count == 1 { "" } else { "s" };
                    lines.push(Line::styled(
                        format!("  {count} visualization{plural}"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        f.render_stateful_widget(list, rect, &mut app.section_list_state);
    }
}
