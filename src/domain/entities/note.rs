//! Note entity: a text record that belongs to exactly one folder.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A stored note row.
///
/// `modified` is set by the store when the row is inserted and is never
/// touched by the API afterwards.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Note {
    pub id: i64,
    pub note_name: String,
    pub content: Option<String>,
    pub folder_id: i64,
    pub modified: DateTime<Utc>,
}

impl Note {
    pub fn new(
        id: i64,
        note_name: String,
        content: Option<String>,
        folder_id: i64,
        modified: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            note_name,
            content,
            folder_id,
            modified,
        }
    }
}

/// Input data for creating a new note.
///
/// `folder_id` is not checked against the folder table here; the store's
/// foreign key rejects dangling references.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub note_name: String,
    pub content: Option<String>,
    pub folder_id: i64,
}

/// Partial update for an existing note.
///
/// `None` fields keep their stored value; a patch can never null a column.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub note_name: Option<String>,
    pub folder_id: Option<i64>,
    pub content: Option<String>,
}

impl NotePatch {
    /// Returns true when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.note_name.is_none() && self.folder_id.is_none() && self.content.is_none()
    }
}
