use guestbook_core::{Comment, PersistenceError};

/// Parses a slot's text. Blank text counts as corrupt, not as "nothing saved".
pub fn decode(text: &str) -> Result<Vec<Comment>, PersistenceError> {
    if text.trim().is_empty() {
        return Err(PersistenceError::corrupt("empty slot"));
    }
    serde_json::from_str(text).map_err(|err| PersistenceError::corrupt(err.to_string()))
}

pub fn encode(comments: &[Comment]) -> Result<String, PersistenceError> {
    serde_json::to_string_pretty(comments).map_err(|err| PersistenceError::encode(err.to_string()))
}
