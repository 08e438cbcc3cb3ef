//! Terminal User Interface module
//!
//! Interactive interface built with ratatui: two list views (expenses and
//! income) over the shared entry store, an edit dialog for values, and a
//! confirmation dialog for deletes.

pub mod app;
pub mod handler;
pub mod layout;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

pub use app::App;
pub use terminal::run_tui;
