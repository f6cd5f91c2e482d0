//! # Storage Layer
//!
//! This module defines the storage abstraction for groc. The [`ItemStore`] trait
//! lets the API work against any backend that can hand back, and take, the whole
//! list at once.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One item per line in a plain text file: `id|name|checked|created_at`
//!   - Missing file means an empty list
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Whole-list Semantics
//!
//! Stores never update single records. Every mutation in the command layer is a
//! full `load_items` → change → `save_items` cycle, so a backend only has to
//! get those two calls right.
//!
//! Neither call reports failure. A store that cannot read returns an empty
//! list, and one that cannot write logs the error and carries on. Backends that
//! can fail expose their own fallible methods (see [`fs::FileStore::read_items`]).

use crate::model::Item;

pub mod fs;
pub mod memory;

/// Abstract interface for grocery list storage.
pub trait ItemStore {
    /// Every stored item, in the order it was saved.
    fn load_items(&self) -> Vec<Item>;

    /// Replace the stored list with exactly `items`, keeping their order.
    fn save_items(&mut self, items: &[Item]);
}
