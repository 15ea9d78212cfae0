//! # Storage Layer
//!
//! The [`RecordStore`] trait hides where the registry document lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One JSON document, `data/users.json` by default
//!   - Directory created on first write
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate corrupt content and failing writes
//!
//! ## Read/Write Contract
//!
//! Every mutation is a full cycle: [`RecordStore::load`] the whole document,
//! change it in memory, [`RecordStore::save`] the whole document back. There
//! is no cache between calls and no partial write.
//!
//! Reading has two layers. [`RecordStore::read_document`] reports exactly
//! what went wrong through [`LoadError`]; [`RecordStore::load`] is where a
//! missing or unreadable document is turned into an empty one. Writing has
//! no such fallback and returns errors as-is.
//!
//! ## Storage Format
//!
//! ```text
//! data/
//! ├── users.json      # {"users": [ ... ]}, four-space indented
//! └── config.json     # optional, see crate::config
//! ```

use crate::error::{LoadError, Result};
use crate::model::Document;

pub mod fs;
pub mod memory;

pub trait RecordStore {
    /// Read and parse the stored document.
    fn read_document(&self) -> std::result::Result<Document, LoadError>;

    /// Replace the stored document.
    fn write_document(&mut self, doc: &Document) -> Result<()>;

    /// Read the document, treating absence or corruption as an empty registry.
    fn load(&self) -> Document {
        match self.read_document() {
            Ok(doc) => doc,
            Err(LoadError::Missing) => {
                tracing::debug!("no stored document, starting empty");
                Document::default()
            }
            Err(e) => {
                tracing::debug!(error = %e, "ignoring unreadable document, starting empty");
                Document::default()
            }
        }
    }

    /// Write the whole document, overwriting whatever was there.
    fn save(&mut self, doc: &Document) -> Result<()> {
        self.write_document(doc)?;
        tracing::debug!(users = doc.len(), "document saved");
        Ok(())
    }
}
