//! DTOs for note endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewNote, Note, NotePatch};
use crate::error::AppError;
use crate::utils::sanitize::sanitize_html;

/// Wire representation of a note.
///
/// `note_name` and `content` are sanitized; a note stored without content
/// is reported with an empty `content` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteItem {
    pub id: i64,
    pub note_name: String,
    pub content: String,
    pub modified: DateTime<Utc>,
    pub folder_id: i64,
}

impl From<Note> for NoteItem {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            note_name: sanitize_html(&note.note_name),
            content: note
                .content
                .as_deref()
                .map(sanitize_html)
                .unwrap_or_default(),
            modified: note.modified,
            folder_id: note.folder_id,
        }
    }
}

/// Request body for `POST /api/note`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateNoteRequest {
    pub note_name: Option<String>,
    pub folder_id: Option<i64>,
    pub content: Option<String>,
}

impl TryFrom<CreateNoteRequest> for NewNote {
    type Error = AppError;

    /// Required fields are checked in order, so the error names the first
    /// one that is missing.
    fn try_from(request: CreateNoteRequest) -> Result<Self, Self::Error> {
        let note_name = request
            .note_name
            .ok_or_else(|| AppError::missing_field("note_name"))?;
        let folder_id = request
            .folder_id
            .ok_or_else(|| AppError::missing_field("folder_id"))?;

        Ok(NewNote {
            note_name,
            content: request.content,
            folder_id,
        })
    }
}

/// Request body for `PATCH /api/note/{id}`.
///
/// Absent and `null` fields are both left unchanged. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub note_name: Option<String>,
    pub folder_id: Option<i64>,
    pub content: Option<String>,
}

impl From<UpdateNoteRequest> for NotePatch {
    fn from(request: UpdateNoteRequest) -> Self {
        NotePatch {
            note_name: request.note_name,
            folder_id: request.folder_id,
            content: request.content,
        }
    }
}
