//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It dispatches, and nothing else: business rules live in
//! `commands/*.rs`, persistence in `store/`.
//!
//! `IdregApi<S: RecordStore>` is generic over the storage backend:
//! - Production: `IdregApi<FileStore>`
//! - Testing: `IdregApi<InMemoryStore>`
//!
//! The store is owned by the facade and handed to each command explicitly;
//! there is no process-wide registry state.

use crate::commands;
use crate::error::Result;
use crate::model::{Document, RecordUpdate, UserRecord};
use crate::store::RecordStore;

pub struct IdregApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> IdregApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The full registry; empty if nothing readable is stored.
    pub fn load(&self) -> Document {
        self.store.load()
    }

    pub fn save(&mut self, doc: &Document) -> Result<()> {
        self.store.save(doc)
    }

    pub fn list_users(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn add_user(&mut self, record: UserRecord) -> Result<CmdResult> {
        commands::add::run(&mut self.store, record)
    }

    pub fn remove_user(&mut self, user_id: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, user_id)
    }

    pub fn edit_user(&mut self, user_id: &str, update: &RecordUpdate) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, user_id, update)
    }

    pub fn check_identifiers(&self, record: &UserRecord) -> Result<CmdResult> {
        commands::check::run(record)
    }

    pub fn audit(&self) -> Result<CmdResult> {
        commands::check::audit(&self.store)
    }

    pub fn generate_password(&self, length: usize) -> Result<CmdResult> {
        commands::password::generate(length)
    }

    pub fn check_password(&self, password: &str) -> Result<CmdResult> {
        commands::password::check(password)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn dispatches_mutations_to_store() {
        let mut api = IdregApi::new(InMemoryStore::new());
        api.add_user(UserRecord::new("1").with_name("A")).unwrap();
        api.edit_user("1", &RecordUpdate::new().with_name("B"))
            .unwrap();
        assert_eq!(api.load().users[0].name.as_deref(), Some("B"));

        let removed = api.remove_user("1").unwrap();
        assert_eq!(removed.affected_users.len(), 1);
        assert!(api.list_users().unwrap().listed_users.is_empty());
    }

    #[test]
    fn save_of_load_is_stable() {
        let mut api = IdregApi::new(InMemoryStore::new());
        api.add_user(UserRecord::new("1").with_pesel("44051401458"))
            .unwrap();
        let before = api.store().raw().unwrap().to_vec();

        let doc = api.load();
        api.save(&doc).unwrap();

        assert_eq!(api.store().raw().unwrap(), before.as_slice());
    }
}
