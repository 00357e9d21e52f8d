mod comment_id;
pub(crate) mod text;

pub use comment_id::CommentId;
pub use text::{Author, Body};
