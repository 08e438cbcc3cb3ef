//! The shared in-memory entry store
//!
//! Single source of truth for the entry collection, shared by every view.
//! Reads hand out an insertion-ordered snapshot; the only mutation primitive
//! is [`EntryStore::replace`], which swaps in a caller-provided collection,
//! bumps the revision counter, and notifies subscribers. The store performs
//! no validation; callers compute the next full collection and replace.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::models::Entry;

type Subscriber = Box<dyn Fn() + Send + Sync>;

/// Shared container for the entry collection
///
/// Lock poisoning is recovered rather than surfaced: this layer has no error
/// conditions.
pub struct EntryStore {
    entries: RwLock<Vec<Entry>>,
    subscribers: RwLock<Vec<Subscriber>>,
    revision: AtomicU64,
}

impl EntryStore {
    /// Create a store holding the given collection
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries: RwLock::new(entries),
            subscribers: RwLock::new(Vec::new()),
            revision: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current collection, insertion-ordered
    pub fn read(&self) -> Vec<Entry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Atomically substitute the entire collection
    ///
    /// Bumps the revision and notifies all subscribers after the swap.
    pub fn replace(&self, entries: Vec<Entry>) {
        {
            let mut guard = self
                .entries
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = entries;
        }
        self.revision.fetch_add(1, Ordering::SeqCst);
        self.notify();
    }

    /// Register a callback invoked after every `replace`
    pub fn subscribe(&self, subscriber: impl Fn() + Send + Sync + 'static) {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(subscriber));
    }

    /// Monotone counter bumped by each `replace`
    ///
    /// Lets callers (and tests) detect whether a replacement happened.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    /// Number of entries in the collection
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn notify(&self) {
        let subscribers = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for subscriber in subscribers.iter() {
            subscriber();
        }
    }
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
