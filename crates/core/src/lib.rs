pub mod clock;
pub mod domain;
pub mod error;
pub mod storage;
pub mod store;
pub mod types;

pub use clock::{Clock, SystemClock};
pub use domain::comments::{Comment, Draft, EditCursor, FormMode};
pub use error::{PersistenceError, PersistenceErrorKind, StoreError, ValidationError};
pub use storage::CommentStorage;
pub use store::{CommentStore, DEFAULT_TIMESTAMP_FORMAT, StoreOptions, Submitted};
pub use types::{Author, Body, CommentId};
