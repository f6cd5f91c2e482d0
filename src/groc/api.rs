//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all groc operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Allocates ids** for new items
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no copy of the list: every call goes back to
//! the store.
//!
//! ## Id Allocation
//!
//! `next_id` is read once, when the API is built, as the highest stored id plus
//! one. It only moves forward, and only when an add succeeds, so removed ids are
//! never handed out again by this process. A later process starts from whatever
//! the highest remaining id is at that point.
//!
//! Once `u32::MAX` has been used there is no next id: reads keep working and
//! every add is rejected.
//!
//! ## Generic Over ItemStore
//!
//! `GroceryApi<S: ItemStore>` is generic over the storage backend:
//! - Production: `GroceryApi<FileStore>`
//! - Testing: `GroceryApi<InMemoryStore>`

use crate::commands;
use crate::error::{GrocError, Result};
use crate::store::ItemStore;
use tracing::debug;

/// The main API facade for grocery list operations.
pub struct GroceryApi<S: ItemStore> {
    store: S,
    next_id: Option<u32>,
}

impl<S: ItemStore> GroceryApi<S> {
    pub fn new(store: S) -> Self {
        let next_id = store
            .load_items()
            .iter()
            .map(|item| item.id)
            .max()
            .unwrap_or(0)
            .checked_add(1);
        debug!(?next_id, "Initialized grocery api");
        Self { store, next_id }
    }

    pub fn add_item(&mut self, name: &str) -> Result<commands::CmdResult> {
        let id = self.next_id.ok_or_else(|| {
            GrocError::InvalidArgument("No item ids left".to_string())
        })?;
        let result = commands::add::run(&mut self.store, id, name)?;
        self.next_id = id.checked_add(1);
        Ok(result)
    }

    pub fn list_items(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn check_item(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::check::run(&mut self.store, id)
    }

    pub fn remove_item(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn clear_items(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    /// The id the next successful add will receive, if any is left.
    pub fn next_id(&self) -> Option<u32> {
        self.next_id
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn names(api: &GroceryApi<InMemoryStore>) -> Vec<String> {
        api.list_items()
            .unwrap()
            .listed_items
            .into_iter()
            .map(|i| i.name)
            .collect()
    }

    #[test]
    fn fresh_store_starts_at_one() {
        let mut api = GroceryApi::new(InMemoryStore::new());
        let first = api.add_item("Bananas").unwrap();
        let second = api.add_item("Apples").unwrap();

        assert_eq!(first.affected_items[0].id, 1);
        assert_eq!(second.affected_items[0].id, 2);
        assert!(!first.affected_items[0].checked);
        assert_eq!(names(&api), vec!["Bananas", "Apples"]);
    }

    #[test]
    fn resumes_after_highest_stored_id() {
        let store = StoreFixture::new()
            .with_item(4, "Milk")
            .with_item(2, "Eggs")
            .store;
        let mut api = GroceryApi::new(store);
        assert_eq!(api.next_id(), Some(5));

        let result = api.add_item("Bread").unwrap();
        assert_eq!(result.affected_items[0].id, 5);
    }

    #[test]
    fn rejected_add_does_not_consume_an_id() {
        let mut api = GroceryApi::new(InMemoryStore::new());
        assert!(matches!(
            api.add_item("   "),
            Err(GrocError::InvalidArgument(_))
        ));
        assert!(api.add_item("").is_err());
        assert!(names(&api).is_empty());

        let result = api.add_item("Milk").unwrap();
        assert_eq!(result.affected_items[0].id, 1);
    }

    #[test]
    fn removed_ids_are_not_reused_in_process() {
        let mut api = GroceryApi::new(InMemoryStore::new());
        api.add_item("A").unwrap();
        api.add_item("B").unwrap();
        api.remove_item(2).unwrap();

        let result = api.add_item("C").unwrap();
        assert_eq!(result.affected_items[0].id, 3);
    }

    #[test]
    fn restart_resumes_at_max_plus_one() {
        let mut api = GroceryApi::new(InMemoryStore::new());
        api.add_item("A").unwrap();
        api.add_item("B").unwrap();
        api.add_item("C").unwrap();
        api.remove_item(1).unwrap();

        let mut restarted = GroceryApi::new(api.into_store());
        let result = restarted.add_item("D").unwrap();
        assert_eq!(result.affected_items[0].id, 4);
    }

    #[test]
    fn clear_does_not_reset_ids() {
        let mut api = GroceryApi::new(InMemoryStore::new());
        api.add_item("A").unwrap();
        api.clear_items().unwrap();
        assert!(names(&api).is_empty());

        let result = api.add_item("B").unwrap();
        assert_eq!(result.affected_items[0].id, 2);
    }

    #[test]
    fn check_and_remove_dispatch_by_id() {
        let mut api = GroceryApi::new(InMemoryStore::new());
        api.add_item("Bananas").unwrap();
        api.add_item("Bananas").unwrap();

        let checked = api.check_item(2).unwrap();
        assert_eq!(checked.affected_items[0].id, 2);

        let listed = api.list_items().unwrap().listed_items;
        assert!(!listed[0].checked);
        assert!(listed[1].checked);

        api.remove_item(1).unwrap();
        let remaining = api.list_items().unwrap().listed_items;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);

        assert!(api.check_item(999).is_err());
        assert!(api.remove_item(999).is_err());
        assert_eq!(api.list_items().unwrap().listed_items.len(), 1);
    }

    #[test]
    fn highest_possible_id_still_lists() {
        let store = StoreFixture::new().with_item(u32::MAX, "Milk").store;
        let api = GroceryApi::new(store);
        assert_eq!(api.next_id(), None);

        let listed = api.list_items().unwrap().listed_items;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, u32::MAX);
    }

    #[test]
    fn add_is_rejected_when_ids_run_out() {
        let store = StoreFixture::new().with_item(u32::MAX, "Milk").store;
        let mut api = GroceryApi::new(store);

        let err = api.add_item("Eggs").unwrap_err();
        assert!(matches!(err, GrocError::InvalidArgument(_)));
        assert_eq!(api.list_items().unwrap().listed_items.len(), 1);
    }

    #[test]
    fn last_id_can_be_used_once() {
        let store = StoreFixture::new().with_item(u32::MAX - 1, "Milk").store;
        let mut api = GroceryApi::new(store);

        let result = api.add_item("Eggs").unwrap();
        assert_eq!(result.affected_items[0].id, u32::MAX);
        assert_eq!(api.next_id(), None);
        assert!(api.add_item("Bread").is_err());
    }
}
