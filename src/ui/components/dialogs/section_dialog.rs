//! Section add/edit dialog component

use ratatui::{
    layout::Alignment,
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::super::super::app::{App, DraftField};
use super::super::super::layout::LayoutManager;
use crate::builder::DraftMode;

/// Section add/edit dialog component
pub struct SectionDialog;

impl SectionDialog {
    /// Render the section dialog
    pub fn render(f: &mut Frame, app: &App) {
        let Some(draft) = app.editor.draft() else { return };

        let dialog_area = LayoutManager::centered_rect(70, 70, f.area());
        f.render_widget(Clear, dialog_area);

        let title = match app.editor.mode() {
            Some(DraftMode::Editing) if !draft.title.is_empty() => format!("✏️ Edit Section: {}", draft.title),
            Some(DraftMode::Editing) => "✏️ Edit Section".to_string(),
            _ => "➕ New Section".to_string(),
        };

        let outer = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center);
        let inner = outer.inner(dialog_area);
        f.render_widget(outer, dialog_area);

        // Title input
        let title_rect = Rect::new(inner.x, inner.y, inner.width, 3);
        let title_style = if app.draft_focus == DraftField::Title {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let title_text = if draft.title.is_empty() {
            "(required)"
        } else {
            &draft.title
        };
        let title_paragraph = Paragraph::new(title_text)
            .block(Block::default().borders(Borders::ALL).title("Title"))
            .style(title_style);
        f.render_widget(title_paragraph, title_rect);

        // Description input
        let description_rect = Rect::new(inner.x, inner.y + 3, inner.width, 3);
        let description_style = if app.draft_focus == DraftField::Description {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let description_paragraph = Paragraph::new(draft.description.as_str())
            .block(Block::default().borders(Borders::ALL).title("Description"))
            .style(description_style);
        f.render_widget(description_paragraph, description_rect);

        // Visualization list fills the remaining height
        let list_height = inner.height.saturating_sub(6);
        if list_height == 0 {
            return;
        }
        let list_rect = Rect::new(inner.x, inner.y + 6, inner.width, list_height);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("Visualizations ({})", draft.visualizations.len()));

        if draft.visualizations.is_empty() {
            let empty = Paragraph::new("None yet. Press Ctrl+v to add one.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(empty, list_rect);
            return;
        }

        let items: Vec<ListItem> = draft
            .visualizations
            .iter()
            .enumerate()
            .map(|(index, viz)| {
                let style = if index == app.selected_visualization_index {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::styled(
                    format!("{} ({}, width {})", viz.title, viz.kind, viz.width),
                    style,
                ))
            })
            .collect();

        f.render_widget(List::new(items).block(block), list_rect);
    }
}
