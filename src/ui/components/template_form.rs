//! Template metadata form component

use ratatui::{
    layout::Alignment,
    prelude::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::super::app::{App, TemplateField};
use super::super::layout::LayoutManager;

/// Template metadata form component
pub struct TemplateForm;

impl TemplateForm {
    /// Render the template form pane
    pub fn render(f: &mut Frame, rect: Rect, app: &App) {
        let template = app.store.template();

        let title = if template.is_new() {
            "📝 New Report Template"
        } else {
            "📝 Edit Report Template"
        };

        let outer = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center);
        let inner = outer.inner(rect);
        f.render_widget(outer, rect);

        let rows = LayoutManager::form_layout(inner);
        let top_row = LayoutManager::form_row_layout(rows[0]);

        // Name field
        let name_style = if app.editing_field == Some(TemplateField::Name) {
            Style::default().fg(Color::Yellow)
        } else if template.name.is_empty() {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::White)
        };
        let name_text = if template.name.is_empty() {
            "(required - press 'n')"
        } else {
            &template.name
        };
        let name = Paragraph::new(name_text)
            .block(Block::default().borders(Borders::ALL).title("Name"))
            .style(name_style);
        f.render_widget(name, top_row[0]);

        // Data source field
        let source_style = if template.data_source.is_some() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Red)
        };
        let source_text = app
            .data_source_name()
            .map_or_else(|| "(required - press 'c' to cycle)".to_string(), ToString::to_string);
        let source = Paragraph::new(source_text)
            .block(Block::default().borders(Borders::ALL).title("Data Source"))
            .style(source_style);
        f.render_widget(source, top_row[1]);

        // Description field
        let description_style = if app.editing_field == Some(TemplateField::Description) {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let description_text = if template.description.is_empty() {
            "(press 'i' to describe this template)"
        } else {
            &template.description
        };
        let description = Paragraph::new(description_text)
            .block(Block::default().borders(Borders::ALL).title("Description"))
            .style(description_style);
        f.render_widget(description, rows[1]);

        // Visibility flag
        let visibility = if template.is_public {
            "🌐 Public - visible to all users"
        } else {
            "🔒 Private - visible to you only"
        };
        let flags = Paragraph::new(visibility).style(Style::default().fg(Color::Gray));
        f.render_widget(flags, rows[2]);
    }
}
