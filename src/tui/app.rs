//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::settings::Settings;
use crate::models::{EntryId, EntryKind};
use crate::services::EntryService;
use crate::store::EntryStore;

use super::dialogs::edit_value::EditValueState;

/// Which list view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Expenses,
    Income,
}

impl ActiveView {
    /// The entry kind shown by this view
    pub fn kind(&self) -> EntryKind {
        match self {
            ActiveView::Expenses => EntryKind::Expense,
            ActiveView::Income => EntryKind::Income,
        }
    }

    /// View title for tabs and headers
    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Expenses => "Expenses",
            ActiveView::Income => "Income",
        }
    }

    /// Tab position of this view
    pub fn index(&self) -> usize {
        match self {
            ActiveView::Expenses => 0,
            ActiveView::Income => 1,
        }
    }

    /// The other view
    pub fn toggled(&self) -> Self {
        match self {
            ActiveView::Expenses => ActiveView::Income,
            ActiveView::Income => ActiveView::Expenses,
        }
    }
}

/// Currently active dialog (if any)
///
/// While a dialog is open it receives all key events; the list views are
/// blocked until it closes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    EditValue(EditValueState),
    ConfirmDelete(EntryId),
}

/// Main application state
pub struct App<'a> {
    /// The shared entry store
    pub store: &'a EntryStore,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the active view's filtered list
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(store: &'a EntryStore, settings: &'a Settings) -> Self {
        Self {
            store,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Switch to a different view, resetting the selection
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.selected_index = 0;
    }

    /// Entries shown by the active view, in collection order
    pub fn visible_entries(&self) -> Vec<crate::models::Entry> {
        EntryService::new(self.store).of_kind(self.active_view.kind())
    }

    /// The currently selected entry id, if the view is non-empty
    pub fn selected_entry_id(&self) -> Option<EntryId> {
        self.visible_entries()
            .get(self.selected_index)
            .map(|entry| entry.id)
    }

    /// Open the edit dialog for the selected entry
    pub fn open_edit_dialog(&mut self) {
        if let Some(id) = self.selected_entry_id() {
            if let Some(entry) = EntryService::new(self.store).get(id) {
                self.active_dialog = ActiveDialog::EditValue(EditValueState::for_entry(&entry));
            }
        }
    }

    /// Open the delete confirmation for the selected entry
    pub fn open_confirm_delete(&mut self) {
        if let Some(id) = self.selected_entry_id() {
            self.active_dialog = ActiveDialog::ConfirmDelete(id);
        }
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Move selection up in the active view
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down in the active view
    pub fn move_down(&mut self) {
        let max = self.visible_entries().len();
        if self.selected_index + 1 < max {
            self.selected_index += 1;
        }
    }

    /// Keep the selection within the view after the collection shrank
    pub fn clamp_selection(&mut self) {
        let max = self.visible_entries().len();
        self.selected_index = self.selected_index.min(max.saturating_sub(1));
    }
}
