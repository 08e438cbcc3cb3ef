//! Business logic layer
//!
//! Services translate user actions into whole-collection replacements on the
//! shared entry store.

pub mod entries;

pub use entries::EntryService;
