//! Shared entry store and entries-file loading
//!
//! The store is the single source of truth for the entry collection. All
//! mutation goes through whole-collection replacement; there is no partial
//! update API and no write-back to disk.

pub mod entries;
pub mod file_io;

pub use entries::EntryStore;
pub use file_io::load_entries;
