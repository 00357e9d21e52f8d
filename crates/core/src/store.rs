use std::collections::HashSet;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::domain::comments::{Comment, Draft, EditCursor, FormMode};
use crate::error::{PersistenceError, StoreError, ValidationError};
use crate::storage::CommentStorage;
use crate::types::CommentId;
use crate::types::text::validate;

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// chrono format string for `createdOrUpdatedAt`, checked on construction.
    timestamp_format: String,
}

impl StoreOptions {
    pub fn new(timestamp_format: impl Into<String>) -> Result<Self, ValidationError> {
        let timestamp_format = timestamp_format.into();
        if !Self::is_valid_timestamp_format(&timestamp_format) {
            return Err(ValidationError::InvalidTimestampFormat(timestamp_format));
        }
        Ok(StoreOptions { timestamp_format })
    }

    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }

    /// Rejects empty formats and ones chrono cannot render.
    pub fn is_valid_timestamp_format(format: &str) -> bool {
        !format.trim().is_empty() && !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        StoreOptions {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Outcome of submitting the shared form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    Created(Comment),
    Updated(Comment),
}

/// Newest-first comment collection with a single edit cursor, written back to
/// its storage slot after every mutation.
pub struct CommentStore<S> {
    storage: S,
    clock: Box<dyn Clock>,
    options: StoreOptions,
    comments: Vec<Comment>,
    cursor: EditCursor,
    draft: Draft,
    last_id: Option<CommentId>,
}

impl<S: CommentStorage> CommentStore<S> {
    pub fn initialize(storage: S, options: StoreOptions) -> Self {
        Self::with_clock(storage, options, SystemClock)
    }

    pub fn with_clock(storage: S, options: StoreOptions, clock: impl Clock + 'static) -> Self {
        let comments = load(&storage);
        let last_id = comments.iter().map(|comment| comment.id).max();
        info!(count = comments.len(), "comment store initialized");
        CommentStore {
            storage,
            clock: Box::new(clock),
            options,
            comments,
            cursor: EditCursor::Idle,
            draft: Draft::default(),
            last_id,
        }
    }

    pub fn add(&mut self, author: &str, body: &str) -> Result<Comment, StoreError> {
        let (author, body) = validate(author, body)?;
        let now = self.clock.now();
        let id = CommentId::next(now.timestamp_millis(), self.last_id);
        self.last_id = Some(id);
        let comment = Comment::new(id, author, body, self.format(now));
        self.comments.insert(0, comment.clone());
        self.draft = Draft::default();
        info!(id = %id, "comment added");
        self.persist()?;
        Ok(comment)
    }

    pub fn begin_edit(&mut self, id: CommentId) -> Result<Comment, StoreError> {
        let comment = self.get(id).cloned().ok_or(StoreError::NotFound(id))?;
        self.cursor = EditCursor::Editing(id);
        self.draft = Draft::new(comment.author.clone(), comment.body.clone());
        debug!(id = %id, "edit started");
        Ok(comment)
    }

    /// Applies the form contents to the comment under edit.
    ///
    /// Returns `Ok(None)` without touching anything when no edit is active.
    pub fn update(&mut self, author: &str, body: &str) -> Result<Option<Comment>, StoreError> {
        let Some(id) = self.cursor.editing() else {
            debug!("update ignored, no edit in progress");
            return Ok(None);
        };
        self.update_entry(id, author, body).map(Some)
    }

    pub fn delete(&mut self, id: CommentId) -> Result<(), StoreError> {
        let before = self.comments.len();
        self.comments.retain(|comment| comment.id != id);
        let removed = before != self.comments.len();
        if self.cursor.editing() == Some(id) {
            self.reset_form();
        }
        if removed {
            info!(id = %id, "comment deleted");
        } else {
            debug!(id = %id, "delete of unknown comment");
        }
        self.persist()?;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.cursor.editing() {
            debug!(id = %id, "edit cancelled");
            self.reset_form();
        }
    }

    /// Submits the current draft through `add` or `update` depending on the
    /// form mode.
    pub fn submit_draft(&mut self) -> Result<Submitted, StoreError> {
        let Draft { author, body } = self.draft.clone();
        match self.cursor {
            EditCursor::Idle => self.add(&author, &body).map(Submitted::Created),
            EditCursor::Editing(id) => self
                .update_entry(id, &author, &body)
                .map(Submitted::Updated),
        }
    }

    pub fn list(&self) -> &[Comment] {
        &self.comments
    }

    pub fn snapshot(&self) -> Vec<Comment> {
        self.comments.clone()
    }

    pub fn get(&self, id: CommentId) -> Option<&Comment> {
        self.comments.iter().find(|comment| comment.id == id)
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn cursor(&self) -> EditCursor {
        self.cursor
    }

    pub fn mode(&self) -> FormMode {
        self.cursor.mode()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_draft(&mut self, author: impl Into<String>, body: impl Into<String>) {
        self.draft = Draft::new(author, body);
    }

    pub fn set_draft_author(&mut self, author: impl Into<String>) {
        self.draft.author = author.into();
    }

    pub fn set_draft_body(&mut self, body: impl Into<String>) {
        self.draft.body = body.into();
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn update_entry(
        &mut self,
        id: CommentId,
        author: &str,
        body: &str,
    ) -> Result<Comment, StoreError> {
        let (author, body) = validate(author, body)?;
        let timestamp = self.format(self.clock.now());
        let Some(comment) = self.comments.iter_mut().find(|comment| comment.id == id) else {
            warn!(id = %id, "edited comment no longer exists, returning to create mode");
            self.reset_form();
            return Err(StoreError::NotFound(id));
        };
        comment.revise(author, body, timestamp);
        let updated = comment.clone();
        self.reset_form();
        info!(id = %id, "comment updated");
        self.persist()?;
        Ok(updated)
    }

    fn reset_form(&mut self) {
        self.cursor = EditCursor::Idle;
        self.draft = Draft::default();
    }

    fn format(&self, now: DateTime<Local>) -> String {
        now.format(&self.options.timestamp_format).to_string()
    }

    fn persist(&mut self) -> Result<(), PersistenceError> {
        self.storage.write(&self.comments).inspect_err(|err| {
            warn!(error = %err, count = self.comments.len(), "failed to persist comments");
        })
    }
}

fn load<S: CommentStorage>(storage: &S) -> Vec<Comment> {
    let comments = match storage.read() {
        Ok(Some(comments)) => comments,
        Ok(None) => {
            debug!("no saved comments, starting empty");
            return Vec::new();
        }
        Err(err) => {
            warn!(error = %err, "saved comments unreadable, starting empty");
            return Vec::new();
        }
    };
    let total = comments.len();
    let mut seen = HashSet::with_capacity(total);
    let mut duplicates = 0;
    let mut invalid = 0;
    let mut loaded = Vec::with_capacity(total);
    for comment in comments {
        if !seen.insert(comment.id) {
            duplicates += 1;
            continue;
        }
        let Ok((author, body)) = validate(&comment.author, &comment.body) else {
            invalid += 1;
            continue;
        };
        loaded.push(Comment::new(
            comment.id,
            author,
            body,
            comment.created_or_updated_at,
        ));
    }
    if duplicates > 0 {
        warn!(dropped = duplicates, "dropped comments with duplicate ids");
    }
    if invalid > 0 {
        warn!(dropped = invalid, "dropped comments with blank author or body");
    }
    loaded
}
