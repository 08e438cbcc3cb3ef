//! Dialog modules for the TUI
//!
//! Contains the modal dialogs: value editing, delete confirmation, help.

pub mod confirm;
pub mod edit_value;
pub mod help;
