//! Entry display formatting
//!
//! Plain-text rows and lists for the non-interactive CLI commands.

use crate::models::Entry;

use super::money::signed_amount;

/// Format a single entry for display (list row)
pub fn format_entry_row(entry: &Entry, symbol: &str) -> String {
    format!(
        "{}  {:8} {:24} {:>12}",
        entry.id,
        entry.kind.label(),
        truncate(&entry.title, 24),
        signed_amount(entry, symbol)
    )
}

/// Format a list of entries for display
pub fn format_entry_list(entries: &[Entry], symbol: &str) -> String {
    if entries.is_empty() {
        return "There are no entries.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12}  {:8} {:24} {:>12}\n",
        "Id", "Kind", "Title", "Amount"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for entry in entries {
        output.push_str(&format_entry_row(entry, symbol));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}
