//! Lock-guarded, ordered collection of items.
//!
//! Every public operation takes the mutex for its whole body and releases it
//! when the guard leaves scope. Reads hand back owned copies, so nothing a
//! caller does to a returned value can reach the stored items.

use crate::item::Item;
use log::{debug, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};

// =============================================================================
// Milestone 1: Guarded state
// =============================================================================

#[derive(Debug)]
struct Inner {
    items: Vec<Item>,
    next_id: u32,
}

#[derive(Debug)]
pub struct Collection {
    inner: Mutex<Inner>,
}

/// Aggregate counts taken from a single snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}

impl Collection {
    pub fn new() -> Self {
        Collection {
            inner: Mutex::new(Inner {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    // Every mutation leaves `items` and `next_id` consistent, so a panic in
    // another holder cannot have left a torn list behind.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("collection mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    // =========================================================================
    // Milestone 2: Core operations
    // =========================================================================

    /// Appends a new pending item and returns a copy of it.
    pub fn add(&self, text: impl Into<String>) -> Item {
        let mut inner = self.lock();
        let item = Item::new(inner.next_id, text);
        inner.next_id += 1;
        inner.items.push(item.clone());
        debug!("added item {} ({:?})", item.id, item.text);
        item
    }

    /// Flips the completion flag of the item with `id`.
    ///
    /// Returns `false` when no such item exists; the collection is untouched.
    pub fn toggle(&self, id: u32) -> bool {
        let mut inner = self.lock();
        match inner.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.toggle();
                true
            }
            None => false,
        }
    }

    pub fn all(&self) -> Vec<Item> {
        self.lock().items.clone()
    }

    pub fn completed(&self) -> Vec<Item> {
        self.filtered(Item::is_completed)
    }

    // =========================================================================
    // Milestone 3: Convenience queries
    // =========================================================================

    pub fn pending(&self) -> Vec<Item> {
        self.filtered(|item| !item.is_completed())
    }

    fn filtered(&self, keep: impl Fn(&Item) -> bool) -> Vec<Item> {
        self.lock()
            .items
            .iter()
            .filter(|item| keep(*item))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: u32) -> Option<Item> {
        self.lock().items.iter().find(|item| item.id == id).cloned()
    }

    /// Removes the item with `id`. Identifiers are never reused afterwards.
    pub fn remove(&self, id: u32) -> Option<Item> {
        let mut inner = self.lock();
        let index = inner.items.iter().position(|item| item.id == id)?;
        Some(inner.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    pub fn stats(&self) -> Stats {
        let inner = self.lock();
        let total = inner.items.len();
        let completed = inner.items.iter().filter(|item| item.completed).count();
        Stats {
            total,
            completed,
            pending: total - completed,
        }
    }
}
