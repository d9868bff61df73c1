//! Event handling and key bindings

use super::app::{App, TemplateField};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Handle all user input events
pub fn handle_events(event: Event, app: &mut App) -> anyhow::Result<bool> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // Handle visualization picker - stacked on top of the section dialog
            if app.picking_visualization {
                return Ok(handle_picker_mode(key, app));
            }

            // Handle the section dialog
            if app.editor.is_open() {
                return Ok(handle_section_dialog_mode(key, app));
            }

            // Handle error/info message dialogs
            if app.error_message.is_some() || app.info_message.is_some() {
                return Ok(handle_message_dialog(key, app));
            }

            // Handle section delete confirmation dialog
            if app.delete_confirmation.is_some() {
                return Ok(handle_delete_confirmation(key, app));
            }

            // Handle help panel - block all other shortcuts when help is open
            if app.show_help {
                return Ok(handle_help_panel(key, app));
            }

            // Handle inline template form editing
            if app.editing_field.is_some() {
                return Ok(handle_field_editing_mode(key, app));
            }

            // Handle normal navigation and actions
            return Ok(handle_normal_mode(key, app));
        }
    }
    Ok(false)
}

/// Handle events when the visualization picker is open
fn handle_picker_mode(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.previous_picker_item();
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.next_picker_item();
            true
        }
        KeyCode::Enter => {
            app.pick_visualization();
            true
        }
        KeyCode::Esc => {
            app.close_picker();
            true
        }
        _ => false, // Ignore other keys while picking
    }
}

/// Handle events when the section dialog is open
fn handle_section_dialog_mode(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    // Control chords first so they never land in the text fields
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('v') => {
                app.open_picker();
                return true;
            }
            KeyCode::Char('d') => {
                app.remove_selected_visualization();
                return true;
            }
            _ => return false,
        }
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => {
            app.add_char_to_draft(c);
            true
        }
        KeyCode::Backspace => {
            app.remove_char_from_draft();
            true
        }
        KeyCode::Tab => {
            app.toggle_draft_focus();
            true
        }
        KeyCode::Up => {
            app.previous_visualization();
            true
        }
        KeyCode::Down => {
            app.next_visualization();
            true
        }
        KeyCode::Enter => {
            app.commit_section();
            true
        }
        KeyCode::Esc => {
            app.discard_section();
            true
        }
        _ => false, // Ignore all other keys in the dialog
    }
}

/// Handle events when error or info message dialogs are shown
fn handle_message_dialog(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            app.error_message = None;
            app.info_message = None;
            true
        }
        _ => false, // Ignore all other keys when a message dialog is shown
    }
}

/// Handle events when the section delete confirmation dialog is open
fn handle_delete_confirmation(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('y' | 'Y') => {
            // Confirm delete
            app.delete_section();
            true
        }
        KeyCode::Char('n' | 'N') | KeyCode::Esc => {
            // Cancel delete
            app.cancel_delete_section();
            true
        }
        _ => false, // Ignore other keys during confirmation
    }
}

/// Handle events when help panel is open
fn handle_help_panel(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc => {
            app.show_help = false;
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
            true
        }
        KeyCode::Home => {
            app.help_scroll_offset = 0;
            true
        }
        KeyCode::End => {
            app.help_scroll_offset = usize::MAX; // Will be clamped in UI
            true
        }
        _ => false, // Ignore all other keys when help is open
    }
}

/// Handle events while a template form field is being edited inline
fn handle_field_editing_mode(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_graphic() || c == ' ' => {
            app.add_char_to_field(c);
            true
        }
        KeyCode::Backspace => {
            app.remove_char_from_field();
            true
        }
        KeyCode::Enter | KeyCode::Esc => {
            app.stop_edit_field();
            true
        }
        _ => false, // Ignore all other keys while editing a field
    }
}

/// Handle events in normal mode
fn handle_normal_mode(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    // Check for Ctrl+C first
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.cancel_editing();
        return true;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.cancel_editing();
            true
        }
        KeyCode::Char('s') => {
            app.save_template();
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.previous_section();
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.next_section();
            true
        }
        KeyCode::Char('K') => {
            app.move_section_up();
            true
        }
        KeyCode::Char('J') => {
            app.move_section_down();
            true
        }
        KeyCode::Char('a') => {
            app.start_add_section();
            true
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            app.start_edit_section();
            true
        }
        KeyCode::Char('d') => {
            app.start_delete_section();
            true
        }
        KeyCode::Char('n') => {
            app.start_edit_field(TemplateField::Name);
            true
        }
        KeyCode::Char('i') => {
            app.start_edit_field(TemplateField::Description);
            true
        }
        KeyCode::Char('c') => {
            // Normal 'c' key (not Ctrl+C)
            app.cycle_data_source();
            true
        }
        KeyCode::Char('p') => {
            app.toggle_public();
            true
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            true
        }
        _ => false,
    }
}
