use thiserror::Error;

use crate::types::CommentId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("author is required")]
    EmptyAuthor,
    #[error("comment body is required")]
    EmptyBody,
    #[error("invalid timestamp format: {0}")]
    InvalidTimestampFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceErrorKind {
    /// Stored data exists but does not parse as a comment collection.
    Corrupt,
    Io,
    Encode,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("persistence error ({kind:?}): {message}")]
pub struct PersistenceError {
    pub kind: PersistenceErrorKind,
    pub message: String,
}

impl PersistenceError {
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self {
            kind: PersistenceErrorKind::Corrupt,
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: PersistenceErrorKind::Io,
            message: message.into(),
        }
    }

    pub fn encode(message: impl Into<String>) -> Self {
        Self {
            kind: PersistenceErrorKind::Encode,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("comment {0} not found")]
    NotFound(CommentId),
    /// The in-memory change was kept; only durability is lost.
    #[error("change kept in memory but not saved: {0}")]
    Persistence(#[from] PersistenceError),
}
