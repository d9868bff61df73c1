//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::Duration;

use super::app::App;
use super::components::{
    dialogs::{DeleteConfirmationDialog, ErrorDialog, InfoDialog, SectionDialog, VisualizationPickerDialog},
    HelpPanel, SectionsList, StatusBar, TemplateForm,
};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::builder::{DataSourceRef, EditorHost, Template, VisualizationKind};
use crate::config::Config;

/// Run the interactive template builder.
///
/// `template` is the existing template to edit (or `None` for a fresh one);
/// the host receives the session outcome exactly once.
pub fn run_app(
    config: &Config,
    template: Option<Template>,
    catalog: Vec<VisualizationKind>,
    data_sources: Vec<DataSourceRef>,
    host: &mut dyn EditorHost,
) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if config.ui.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create application state
    let mut app = App::new(template, catalog, data_sources, host);

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, config);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, config: &Config) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app, config))?;

        // All editing operations run synchronously to completion, so the
        // loop only ever waits on input
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    let _handled = handle_events(Event::Key(key), app)?;
                }
                Event::Resize(_, _) => {
                    // Next draw picks up the new size
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App, config: &Config) {
    let chunks = LayoutManager::main_layout(f.area(), config.ui.form_height);

    TemplateForm::render(f, chunks[0], app);
    SectionsList::render(f, chunks[1], app, &config.display);
    StatusBar::render(f, chunks[2], app);

    if app.delete_confirmation.is_some() {
        DeleteConfirmationDialog::render(f, app);
    }

    if app.editor.is_open() {
        SectionDialog::render(f, app);
    }

    if app.picking_visualization {
        VisualizationPickerDialog::render(f, app);
    }

    // Render overlays - error messages have priority over info messages
    if app.error_message.is_some() {
        ErrorDialog::render(f, app);
    } else if app.info_message.is_some() {
        InfoDialog::render(f, app);
    }

    // Render help panel last to ensure it's on top of everything
    if app.show_help {
        HelpPanel::render(f, app);
    }
}
