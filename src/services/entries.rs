//! Entry operations
//!
//! Filter, edit, and delete over the shared store. Every mutation computes
//! the next full collection and substitutes it via [`EntryStore::replace`];
//! nothing is updated in place.

use crate::models::{Entry, EntryId, EntryKind};
use crate::store::EntryStore;

/// Service for entry operations
pub struct EntryService<'a> {
    store: &'a EntryStore,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(store: &'a EntryStore) -> Self {
        Self { store }
    }

    /// Entries of the given kind, in collection order
    pub fn of_kind(&self, kind: EntryKind) -> Vec<Entry> {
        self.store
            .read()
            .into_iter()
            .filter(|entry| entry.kind == kind)
            .collect()
    }

    /// Look up a single entry by id
    pub fn get(&self, id: EntryId) -> Option<Entry> {
        self.store.read().into_iter().find(|entry| entry.id == id)
    }

    /// Apply an edit: set the value of the entry matching `id` to the number
    /// parsed from `input`
    ///
    /// If `input` does not parse as a number the collection is left exactly
    /// as it was: no replacement happens and `false` is returned. A parsed
    /// `0` is a valid value; negative and infinite values are accepted
    /// unchanged.
    pub fn update_value(&self, id: EntryId, input: &str) -> bool {
        let Some(value) = parse_value(input) else {
            return false;
        };

        let next: Vec<Entry> = self
            .store
            .read()
            .into_iter()
            .map(|entry| {
                if entry.id == id {
                    entry.with_value(value)
                } else {
                    entry
                }
            })
            .collect();

        self.store.replace(next);
        true
    }

    /// Remove the entry matching `id`
    ///
    /// Confirmation happens at the interaction layer before this is called.
    /// Returns whether the collection shrank.
    pub fn remove(&self, id: EntryId) -> bool {
        let entries = self.store.read();
        let before = entries.len();

        let next: Vec<Entry> = entries.into_iter().filter(|entry| entry.id != id).collect();
        let removed = next.len() < before;

        self.store.replace(next);
        removed
    }
}

/// Parse a candidate value from edit-input text
///
/// Rust parses `"nan"` as a float; the edit contract treats not-a-number as
/// a failed parse, so it is filtered out here.
fn parse_value(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}
