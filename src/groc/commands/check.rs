use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GrocError, Result};
use crate::store::ItemStore;

/// Mark the item with `id` as checked. Checking an item twice is fine.
pub fn run<S: ItemStore>(store: &mut S, id: u32) -> Result<CmdResult> {
    let mut items = store.load_items();
    let item = items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| GrocError::item_not_found(id))?;

    item.checked = true;
    let item = item.clone();
    store.save_items(&items);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Checked off item {}: {}",
        item.id, item.name
    )));
    Ok(result.with_affected_items(vec![item]))
}
