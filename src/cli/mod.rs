//! Command handlers for the non-interactive commands

use std::path::Path;

use crate::config::paths::TallyPaths;
use crate::config::settings::Settings;
use crate::display::format_entry_list;
use crate::error::TallyResult;
use crate::models::EntryKind;
use crate::services::EntryService;
use crate::store::EntryStore;

/// Print the entries, optionally filtered by kind
pub fn handle_list_command(
    store: &EntryStore,
    settings: &Settings,
    kind: Option<EntryKind>,
) -> TallyResult<()> {
    let entries = match kind {
        Some(kind) => EntryService::new(store).of_kind(kind),
        None => store.read(),
    };

    print!("{}", format_entry_list(&entries, &settings.currency_symbol));
    Ok(())
}

/// Print the resolved paths and settings
pub fn handle_config_command(
    paths: &TallyPaths,
    settings: &Settings,
    entries_path: &Path,
) -> TallyResult<()> {
    println!("tally Configuration");
    println!("===================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    print!("Entries file:   {}", entries_path.display());
    if entries_path.exists() {
        println!();
    } else {
        println!(" (not found, using sample entries)");
    }
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    Ok(())
}
