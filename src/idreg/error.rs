use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdregError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Password must be at least {minimum} characters long (requested {requested})")]
    PasswordTooShort { requested: usize, minimum: usize },
}

pub type Result<T> = std::result::Result<T, IdregError>;

/// Why a document could not be read.
///
/// Readers normally collapse this into an empty document (see
/// [`crate::store::RecordStore::load`]); it exists so that the decision is
/// made in one visible place instead of being swallowed at the I/O site.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("document does not exist")]
    Missing,

    #[error("could not read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse document: {0}")]
    Parse(#[from] serde_json::Error),
}
