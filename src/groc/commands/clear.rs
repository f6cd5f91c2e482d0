use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ItemStore;

/// Empty the list. Doesn't look at what was there.
pub fn run<S: ItemStore>(store: &mut S) -> Result<CmdResult> {
    store.save_items(&[]);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Cleared all items from grocery list."));
    Ok(result)
}
