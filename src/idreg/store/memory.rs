use super::RecordStore;
use crate::error::{IdregError, LoadError, Result};
use crate::model::Document;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Holds the document in its serialized form so reads go through the same
/// parse path as the file store.
#[derive(Default)]
pub struct InMemoryStore {
    content: Option<Vec<u8>>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored bytes, valid or not.
    pub fn with_raw(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: Some(content.into()),
            simulate_write_error: false,
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// What a file store would have on disk right now.
    pub fn raw(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }
}

impl RecordStore for InMemoryStore {
    fn read_document(&self) -> std::result::Result<Document, LoadError> {
        let content = self.content.as_ref().ok_or(LoadError::Missing)?;
        Ok(serde_json::from_slice(content)?)
    }

    fn write_document(&mut self, doc: &Document) -> Result<()> {
        if self.simulate_write_error {
            return Err(IdregError::Store("Simulated write error".to_string()));
        }
        self.content = Some(doc.to_json_bytes()?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::UserRecord;

    /// A store preloaded with three records, the last two sharing an id.
    pub fn populated_store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        let doc = Document::new(vec![
            UserRecord::new("1")
                .with_name("Jan Kowalski")
                .with_pesel("44051401458"),
            UserRecord::new("2")
                .with_name("Firma Sp. z o.o.")
                .with_nip("1234563218")
                .with_regon("123456785"),
            UserRecord::new("2").with_name("Duplicate"),
        ]);
        store.save(&doc).unwrap();
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_empty_document() {
        let store = InMemoryStore::new();
        assert!(matches!(store.read_document(), Err(LoadError::Missing)));
        assert_eq!(store.load(), Document::default());
    }

    #[test]
    fn corrupt_content_loads_empty_document() {
        for raw in ["", "garbage", "[1, 2, 3]", "{\"users\": 5}"] {
            let store = InMemoryStore::with_raw(raw);
            assert!(store.read_document().is_err(), "{raw:?} should not parse");
            assert!(store.load().is_empty());
        }
    }

    #[test]
    fn simulated_write_error_leaves_content_untouched() {
        let mut store = fixtures::populated_store();
        let before = store.raw().unwrap().to_vec();
        store.set_simulate_write_error(true);
        assert!(store.save(&Document::default()).is_err());
        assert_eq!(store.raw().unwrap(), before.as_slice());
    }
}
