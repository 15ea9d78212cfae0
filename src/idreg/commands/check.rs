use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::UserRecord;
use crate::store::RecordStore;
use crate::validate::IdentifierKind;

/// Report on every identifier present on `record`.
///
/// Invalid values come back as error messages; the record is returned in
/// `affected_users` only when everything present is valid.
pub fn run(record: &UserRecord) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut all_valid = true;

    for kind in IdentifierKind::all() {
        let Some(value) = kind.value_of(record) else {
            continue;
        };
        if kind.validate(value) {
            result.add_message(CmdMessage::success(format!("{} {} is valid.", kind, value)));
        } else {
            all_valid = false;
            result.add_message(CmdMessage::error(format!(
                "{} {} is invalid.",
                kind, value
            )));
        }
    }

    if result.messages.is_empty() {
        result.add_message(CmdMessage::info("No identifiers to check."));
    }
    if all_valid {
        result.affected_users.push(record.clone());
    }
    Ok(result)
}

/// List stored records carrying at least one invalid identifier.
pub fn audit<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let doc = store.load();
    let mut result = CmdResult::default();
    let mut flagged = Vec::new();

    for record in doc.users {
        let bad = crate::validate::check_record(&record);
        if bad.is_empty() {
            continue;
        }
        let kinds: Vec<String> = bad.iter().map(|k| k.to_string()).collect();
        result.add_message(CmdMessage::warning(format!(
            "User {}: invalid {}",
            record.user_id,
            kinds.join(", ")
        )));
        flagged.push(record);
    }

    if flagged.is_empty() {
        result.add_message(CmdMessage::success("All stored identifiers are valid."));
    }
    Ok(result.with_listed_users(flagged))
}
