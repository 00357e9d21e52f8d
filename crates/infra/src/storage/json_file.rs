use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use guestbook_core::{Comment, CommentStorage, PersistenceError};
use thiserror::Error;
use tracing::debug;

use super::codec::{decode, encode};

#[derive(Debug, Error)]
pub enum FileStorageError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid slot name: {0}")]
    InvalidSlot(String),
}

/// One named slot stored as `<dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn open(dir: &Path, slot: &str) -> Result<Self, FileStorageError> {
        if !is_valid_slot(slot) {
            return Err(FileStorageError::InvalidSlot(slot.to_string()));
        }
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{slot}.json"));
        debug!(path = %path.display(), "comment slot opened");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    fn replace(&self, contents: &str) -> Result<(), FileStorageError> {
        let temp = self.temp_path();
        let mut file = File::create(&temp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

impl CommentStorage for JsonFileStorage {
    fn read(&self) -> Result<Option<Vec<Comment>>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => decode(&text).map(Some),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PersistenceError::from(FileStorageError::Io(err))),
        }
    }

    fn write(&mut self, comments: &[Comment]) -> Result<(), PersistenceError> {
        let contents = encode(comments)?;
        self.replace(&contents)?;
        debug!(path = %self.path.display(), count = comments.len(), "comment slot written");
        Ok(())
    }
}

impl From<FileStorageError> for PersistenceError {
    fn from(err: FileStorageError) -> Self {
        PersistenceError::io(err.to_string())
    }
}

pub fn is_valid_slot(slot: &str) -> bool {
    !slot.is_empty()
        && slot
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}
