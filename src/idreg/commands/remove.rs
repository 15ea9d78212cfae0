use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// Remove every record whose `user_id` equals `user_id`.
///
/// Nothing is written when no record matches.
pub fn run<S: RecordStore>(store: &mut S, user_id: &str) -> Result<CmdResult> {
    let mut doc = store.load();
    let (removed, kept): (Vec<_>, Vec<_>) =
        doc.users.into_iter().partition(|u| u.user_id == user_id);
    doc.users = kept;

    let mut result = CmdResult::default();
    if removed.is_empty() {
        return Ok(result.user_not_found(user_id));
    }

    store.save(&doc)?;
    tracing::info!(user_id, count = removed.len(), "user removed");

    result.add_message(CmdMessage::success(format!("User {} removed.", user_id)));
    Ok(result.with_affected_users(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserRecord;
    use crate::store::memory::{fixtures, InMemoryStore};

    #[test]
    fn removes_single_match() {
        let mut store = fixtures::populated_store();
        let before = store.load().len();

        let result = run(&mut store, "1").unwrap();

        assert!(!result.is_not_found());
        let doc = store.load();
        assert_eq!(doc.len(), before - 1);
        assert!(doc.users.iter().all(|u| u.user_id != "1"));
    }

    #[test]
    fn removes_every_duplicate() {
        let mut store = fixtures::populated_store();
        let result = run(&mut store, "2").unwrap();
        assert_eq!(result.affected_users.len(), 2);
        let ids: Vec<_> = store.load().users.into_iter().map(|u| u.user_id).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn unknown_id_is_not_found_and_unchanged() {
        let mut store = fixtures::populated_store();
        let before = store.raw().unwrap().to_vec();

        let result = run(&mut store, "404").unwrap();

        assert!(result.is_not_found());
        assert_eq!(store.raw().unwrap(), before.as_slice());
    }

    #[test]
    fn not_found_does_not_write() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        // Would fail if it tried to save.
        let result = run(&mut store, "1").unwrap();
        assert!(result.is_not_found());
        assert!(store.raw().is_none());
    }

    #[test]
    fn preserves_order_of_remaining_records() {
        let mut store = InMemoryStore::new();
        let doc = crate::model::Document::new(vec![
            UserRecord::new("a"),
            UserRecord::new("b"),
            UserRecord::new("c"),
        ]);
        store.save(&doc).unwrap();

        run(&mut store, "b").unwrap();

        let ids: Vec<_> = store.load().users.into_iter().map(|u| u.user_id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
