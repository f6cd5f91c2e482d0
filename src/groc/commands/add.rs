use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GrocError, Result};
use crate::model::Item;
use crate::store::ItemStore;

/// Append a new item with the given id. The name is trimmed and must not be
/// empty; on rejection the store is left untouched.
pub fn run<S: ItemStore>(store: &mut S, id: u32, name: &str) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(GrocError::InvalidArgument(
            "Item name cannot be empty".to_string(),
        ));
    }

    let mut items = store.load_items();
    let item = Item::new(id, name);
    items.push(item.clone());
    store.save_items(&items);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added item {}: {}",
        item.id, item.name
    )));
    Ok(result.with_affected_items(vec![item]))
}
