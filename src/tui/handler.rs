//! Event handler for the TUI
//!
//! Routes key events based on the current application state. An open dialog
//! receives every key until it closes; the list views are blocked meanwhile.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::services::EntryService;

use super::app::{ActiveDialog, ActiveView, App};

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        handle_dialog_key(app, key)
    } else {
        handle_normal_key(app, key)
    }
}

/// Handle keys while no dialog is open
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        // Help
        KeyCode::Char('?') => app.active_dialog = ActiveDialog::Help,

        // View switching
        KeyCode::Tab => app.switch_view(app.active_view.toggled()),
        KeyCode::Char('1') => app.switch_view(ActiveView::Expenses),
        KeyCode::Char('2') => app.switch_view(ActiveView::Income),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') => app.selected_index = 0,
        KeyCode::Char('G') => {
            let count = app.visible_entries().len();
            if count > 0 {
                app.selected_index = count - 1;
            }
        }

        // Edit selected entry
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_dialog(),

        // Delete selected entry (after confirmation)
        KeyCode::Char('d') => app.open_confirm_delete(),

        _ => {}
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match &app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::ConfirmDelete(id) => {
            let id = *id;
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    app.close_dialog();
                    if EntryService::new(app.store).remove(id) {
                        app.clamp_selection();
                        app.set_status("Entry deleted");
                    }
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    app.close_dialog();
                }
                _ => {}
            }
        }
        ActiveDialog::EditValue(_) => handle_edit_value_key(app, key),
        ActiveDialog::None => {}
    }

    Ok(())
}

/// Handle keys for the edit value dialog
fn handle_edit_value_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => {
            let (id, input) = match &app.active_dialog {
                ActiveDialog::EditValue(state) => (state.entry_id, state.input.clone()),
                _ => return,
            };
            if EntryService::new(app.store).update_value(id, &input) {
                app.set_status("Entry updated");
                app.close_dialog();
            }
            // Failed parse: the dialog stays open with the input still
            // editable, and nothing else happens.
        }
        _ => {
            if let ActiveDialog::EditValue(state) = &mut app.active_dialog {
                state.handle_key(key);
            }
        }
    }
}
