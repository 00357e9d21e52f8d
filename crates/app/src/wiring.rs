use thiserror::Error;

use crate::config::AppConfig;
use guestbook_core::CommentStore;
use guestbook_infra::storage::{FileStorageError, JsonFileStorage};

#[derive(Debug, Error)]
pub enum WiringError {
    #[error("storage error: {0}")]
    Storage(#[from] FileStorageError),
}

pub fn build_store(config: &AppConfig) -> Result<CommentStore<JsonFileStorage>, WiringError> {
    let storage = JsonFileStorage::open(&config.data_dir, &config.slot)?;
    Ok(CommentStore::initialize(
        storage,
        config.store_options.clone(),
    ))
}
