use crate::commands::{CmdMessage, CmdResult};
use crate::error::{GrocError, Result};
use crate::store::ItemStore;

pub fn run<S: ItemStore>(store: &mut S, id: u32) -> Result<CmdResult> {
    let mut items = store.load_items();
    let position = items
        .iter()
        .position(|item| item.id == id)
        .ok_or_else(|| GrocError::item_not_found(id))?;

    let removed = items.remove(position);
    store.save_items(&items);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Removed item {}", removed.id)));
    Ok(result.with_affected_items(vec![removed]))
}
