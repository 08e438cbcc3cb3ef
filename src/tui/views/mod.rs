//! TUI Views module
//!
//! Contains the list views, the tab bar, and the status bar.

pub mod entry_list;
pub mod status_bar;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::services::EntryService;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);
    entry_list::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render the view switcher tabs
fn render_tabs(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let tabs = Tabs::new(vec![" 1 Expenses ", " 2 Income "])
        .block(
            Block::default()
                .title(" tally ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .select(app.active_view.index());

    frame.render_widget(tabs, area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame);
        }
        ActiveDialog::EditValue(state) => {
            dialogs::edit_value::render(frame, state);
        }
        ActiveDialog::ConfirmDelete(id) => {
            let message = match EntryService::new(app.store).get(*id) {
                Some(entry) => format!("Delete '{}'?", entry.title),
                None => "Delete this entry?".to_string(),
            };
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::None => {}
    }
}
