use crate::domain::comments::Comment;
use crate::error::PersistenceError;

/// Durable whole-collection slot backing a [`crate::CommentStore`].
///
/// `read` returns `Ok(None)` when nothing was ever saved. Implementations
/// report unparsable contents as [`PersistenceError`]; the store treats any
/// read failure as "nothing saved". `write` replaces the slot's contents with
/// the given collection in order.
pub trait CommentStorage {
    fn read(&self) -> Result<Option<Vec<Comment>>, PersistenceError>;
    fn write(&mut self, comments: &[Comment]) -> Result<(), PersistenceError>;
}
