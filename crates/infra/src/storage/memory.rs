use guestbook_core::{Comment, CommentStorage, PersistenceError};

use super::codec::{decode, encode};

/// Keeps the slot's serialized text in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    raw: Option<String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from arbitrary slot text, e.g. to reproduce a damaged slot.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        MemoryStorage {
            raw: Some(raw.into()),
            fail_writes: false,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Makes subsequent writes fail as if storage were full.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl CommentStorage for MemoryStorage {
    fn read(&self) -> Result<Option<Vec<Comment>>, PersistenceError> {
        self.raw.as_deref().map(decode).transpose()
    }

    fn write(&mut self, comments: &[Comment]) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::io("storage quota exceeded"));
        }
        self.raw = Some(encode(comments)?);
        Ok(())
    }
}
