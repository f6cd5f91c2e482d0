use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ItemStore;

pub fn run<S: ItemStore>(store: &S) -> Result<CmdResult> {
    let items = store.load_items();
    let mut result = CmdResult::default();
    if items.is_empty() {
        result.add_message(CmdMessage::info("No items in your grocery list."));
    }
    Ok(result.with_listed_items(items))
}
