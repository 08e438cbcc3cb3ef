use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tally_cli::cli::{handle_config_command, handle_list_command};
use tally_cli::config::{paths::TallyPaths, settings::Settings};
use tally_cli::models::{Entry, EntryKind};
use tally_cli::store::{load_entries, EntryStore};
use tally_cli::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "tally",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based expense and income tracker",
    long_about = "tally is a small personal finance tracker for the terminal. \
                  It keeps your expense and income entries in two list views \
                  where you can edit values inline and delete entries with a \
                  confirmation prompt."
)]
struct Cli {
    /// Entries file to load (JSON or CSV)
    #[arg(short, long, global = true, env = "TALLY_ENTRIES_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// List entries
    List {
        /// Filter by kind (expense or income)
        #[arg(short, long)]
        kind: Option<EntryKind>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Resolve the entries file: flag > settings override > default location
    let explicit = cli.file.clone().or_else(|| settings.entries_file.clone());
    let entries_path = explicit.clone().unwrap_or_else(|| paths.entries_file());

    // An explicitly configured file must exist; the default location falls
    // back to a sample collection so the app is usable out of the box.
    let load_store = || -> Result<EntryStore> {
        let entries = if entries_path.exists() || explicit.is_some() {
            load_entries(&entries_path)?
        } else {
            sample_entries()
        };
        Ok(EntryStore::new(entries))
    };

    match cli.command {
        Some(Commands::Tui) | None => {
            let store = load_store()?;
            run_tui(&store, &settings)?;
        }
        Some(Commands::List { kind }) => {
            let store = load_store()?;
            handle_list_command(&store, &settings, kind)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings, &entries_path)?;
        }
    }

    Ok(())
}

/// Built-in starter collection used when no entries file exists yet
fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::new("Coffee", EntryKind::Expense, 4.5),
        Entry::new("Groceries", EntryKind::Expense, 82.3),
        Entry::new("Rent", EntryKind::Expense, 800.0),
        Entry::new("Salary", EntryKind::Income, 2000.0),
        Entry::new("Book sale", EntryKind::Income, 15.0),
    ]
}
