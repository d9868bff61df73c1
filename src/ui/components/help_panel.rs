//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

const HELP_TEXT: &str = "\
Navigation
  j / ↓        Next section
  k / ↑        Previous section
  J            Move section down
  K            Move section up

Template
  n            Edit template name
  i            Edit template description
  c            Cycle data source
  p            Toggle public visibility
  s            Save template
  q / Ctrl+C   Cancel editing

Sections
  a            Add section
  e / Enter    Edit selected section
  d            Delete selected section

Section dialog
  Tab          Switch between title and description
  Ctrl+v       Add visualization from catalog
  Ctrl+d       Remove selected visualization
  ↑ / ↓        Select visualization
  Enter        Save section
  Esc          Discard draft

Help
  ?            Toggle this panel
  j/k, Home/End  Scroll";

/// Scrollable help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel
    pub fn render(f: &mut Frame, app: &App) {
        if app.show_help {
            let (width, height) = LayoutManager::help_panel_dimensions(f.area().width, f.area().height);
            let help_area = LayoutManager::centered_rect(width, height, f.area());
            f.render_widget(Clear, help_area);

            let line_count = HELP_TEXT.lines().count();
            let visible = help_area.height.saturating_sub(2) as usize;
            let max_offset = line_count.saturating_sub(visible);
            let offset = app.help_scroll_offset.min(max_offset);

            let paragraph = Paragraph::new(HELP_TEXT)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("❓ Help")
                        .title_alignment(Alignment::Center),
                )
                .style(Style::default().fg(Color::White))
                .scroll((offset as u16, 0));
            f.render_widget(paragraph, help_area);
        }
    }
}
