use serde::{Deserialize, Serialize};

use crate::types::{Author, Body, CommentId};

/// One stored submission. Field names match the persisted record layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub body: String,
    pub created_or_updated_at: String,
}

impl Comment {
    pub(crate) fn new(id: CommentId, author: Author, body: Body, timestamp: String) -> Self {
        Comment {
            id,
            author: author.into_inner(),
            body: body.into_inner(),
            created_or_updated_at: timestamp,
        }
    }

    pub(crate) fn revise(&mut self, author: Author, body: Body, timestamp: String) {
        self.author = author.into_inner();
        self.body = body.into_inner();
        self.created_or_updated_at = timestamp;
    }
}

/// Unsaved contents of the shared comment form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub author: String,
    pub body: String,
}

impl Draft {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Draft {
            author: author.into(),
            body: body.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.author.is_empty() && self.body.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditCursor {
    #[default]
    Idle,
    Editing(CommentId),
}

impl EditCursor {
    pub fn editing(self) -> Option<CommentId> {
        match self {
            EditCursor::Idle => None,
            EditCursor::Editing(id) => Some(id),
        }
    }

    pub fn mode(self) -> FormMode {
        match self {
            EditCursor::Idle => FormMode::Create,
            EditCursor::Editing(id) => FormMode::Update(id),
        }
    }
}

/// What the form's submit button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(CommentId),
}
