use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordUpdate;
use crate::store::RecordStore;

/// Merge `update` into the first record whose `user_id` matches.
///
/// Later records sharing the id are left alone.
pub fn run<S: RecordStore>(
    store: &mut S,
    user_id: &str,
    update: &RecordUpdate,
) -> Result<CmdResult> {
    let mut doc = store.load();
    let mut result = CmdResult::default();

    let Some(record) = doc.users.iter_mut().find(|u| u.user_id == user_id) else {
        return Ok(result.user_not_found(user_id));
    };

    record.merge(update);
    let edited = record.clone();
    store.save(&doc)?;
    tracing::info!(user_id, "user updated");

    result.add_message(CmdMessage::success(format!("User {} updated.", user_id)));
    Ok(result.with_affected_users(vec![edited]))
}
