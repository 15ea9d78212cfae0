use super::RecordStore;
use crate::error::{IdregError, LoadError, Result};
use crate::model::Document;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_USERS_FILE: &str = "users.json";

pub struct FileStore {
    root: PathBuf,
    file_name: String,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_name: DEFAULT_USERS_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn document_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(IdregError::Io)?;
        }
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl RecordStore for FileStore {
    fn read_document(&self) -> std::result::Result<Document, LoadError> {
        let path = self.document_path();
        let content = match fs::read(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(LoadError::Missing),
            Err(e) => return Err(LoadError::Io(e)),
        };
        let doc: Document = serde_json::from_slice(&content)?;
        tracing::debug!(path = %path.display(), users = doc.len(), "document loaded");
        Ok(doc)
    }

    fn write_document(&mut self, doc: &Document) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let path = self.document_path();
        let content = doc.to_json_bytes().map_err(IdregError::Serialization)?;

        // Write aside and rename so a crash never leaves half a document.
        let tmp_path = self
            .root
            .join(format!(".{}.{}.tmp", self.file_name, std::process::id()));
        fs::write(&tmp_path, content).map_err(IdregError::Io)?;
        fs::rename(&tmp_path, &path).map_err(IdregError::Io)?;

        Ok(())
    }
}
