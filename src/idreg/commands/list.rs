use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let doc = store.load();
    let mut result = CmdResult::default();
    if doc.is_empty() {
        result.add_message(CmdMessage::info("No users in the registry."));
    }
    Ok(result.with_listed_users(doc.users))
}
