use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserRecord;
use crate::store::RecordStore;

/// Append `record` to the registry.
///
/// No uniqueness or identifier checks happen here; a duplicate `user_id`
/// is stored as a second entry.
pub fn run<S: RecordStore>(store: &mut S, record: UserRecord) -> Result<CmdResult> {
    let mut doc = store.load();
    doc.users.push(record.clone());
    store.save(&doc)?;
    tracing::info!(user_id = %record.user_id, "user added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "User {} added.",
        record.user_id
    )));
    Ok(result.with_affected_users(vec![record]))
}
