//! Durable storage contracts and implementations.
//!
//! # Responsibility
//! - Model a browser-style key/value local storage area.
//! - Map the note list onto one storage key.
//!
//! # Invariants
//! - Writes replace the whole value stored under a key.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod note_repo;
pub mod storage;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for storage access and stored-value decoding.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Storage location is unavailable.
    Io(std::io::Error),
    /// Value could not be serialized for writing.
    Encode(serde_json::Error),
    /// Stored value under `key` is not parseable.
    CorruptState {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "storage unavailable: {err}"),
            Self::Encode(err) => write!(f, "failed to encode stored value: {err}"),
            Self::CorruptState { key, source } => {
                write!(f, "stored value under `{key}` is corrupt: {source}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::CorruptState { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
