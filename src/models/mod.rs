//! Core data models for tally-cli
//!
//! This module contains the data structures that represent the tracked
//! collection: entries, their ids, and the expense/income discriminator.

pub mod entry;
pub mod ids;

pub use entry::{Entry, EntryKind};
pub use ids::EntryId;
