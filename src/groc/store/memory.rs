use super::ItemStore;
use crate::model::Item;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: Vec<Item>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemStore for InMemoryStore {
    fn load_items(&self) -> Vec<Item> {
        // Callers get their own copy; only save_items changes what is stored.
        self.items.clone()
    }

    fn save_items(&mut self, items: &[Item]) {
        self.items = items.to_vec();
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Append an unchecked item with the given id.
        pub fn with_item(mut self, id: u32, name: &str) -> Self {
            let mut items = self.store.load_items();
            items.push(Item::new(id, name));
            self.store.save_items(&items);
            self
        }

        /// Append an already checked item with the given id.
        pub fn with_checked_item(mut self, id: u32, name: &str) -> Self {
            let mut items = self.store.load_items();
            let mut item = Item::new(id, name);
            item.checked = true;
            items.push(item);
            self.store.save_items(&items);
            self
        }

        /// Append `count` items named "Item 1".."Item N", numbered from 1.
        pub fn with_items(mut self, count: u32) -> Self {
            for i in 1..=count {
                self = self.with_item(i, &format!("Item {}", i));
            }
            self
        }
    }
}
