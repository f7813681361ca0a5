//! Crate-wide error type.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no review item with id '{0}'")]
    UnknownItem(String),

    #[error("review item '{0}' already exists")]
    DuplicateItem(String),

    #[error("unsupported data version {0}")]
    UnsupportedVersion(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
