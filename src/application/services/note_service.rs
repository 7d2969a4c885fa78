//! Note management service.

use crate::domain::entities::{NewNote, Note, NotePatch};
use crate::domain::repositories::NoteRepository;
use crate::error::AppError;
use std::sync::Arc;

pub const NOTE_NOT_FOUND: &str = "note doesn't exist";
pub const NOTE_PATCH_REQUIRED: &str =
    "Request body must contain either 'note_name', 'folder_id' or 'content'";

/// Service for note CRUD.
///
/// The folder a note points at is not looked up here; the store's foreign
/// key is the only referential check.
pub struct NoteService<R: NoteRepository> {
    repository: Arc<R>,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a new note service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all notes in id order.
    pub async fn list_notes(&self) -> Result<Vec<Note>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a note by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the note does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_note(&self, id: i64) -> Result<Note, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOTE_NOT_FOUND))
    }

    /// Creates a new note.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if `folder_id` references no folder or
    /// on any other database error.
    pub async fn create_note(&self, new_note: NewNote) -> Result<Note, AppError> {
        let note = self.repository.create(new_note).await?;
        tracing::info!(note_id = note.id, folder_id = note.folder_id, "Note created");
        Ok(note)
    }

    /// Applies a partial update to an existing note.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the note does not exist.
    /// Returns [`AppError::Validation`] if the patch carries no field.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_note(&self, id: i64, patch: NotePatch) -> Result<(), AppError> {
        self.get_note(id).await?;

        if patch.is_empty() {
            return Err(AppError::bad_request(NOTE_PATCH_REQUIRED));
        }

        if self.repository.update(id, patch).await? == 0 {
            return Err(AppError::not_found(NOTE_NOT_FOUND));
        }

        tracing::info!(note_id = id, "Note updated");
        Ok(())
    }

    /// Deletes a note.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the note does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_note(&self, id: i64) -> Result<(), AppError> {
        self.get_note(id).await?;

        if self.repository.delete(id).await? == 0 {
            return Err(AppError::not_found(NOTE_NOT_FOUND));
        }

        tracing::info!(note_id = id, "Note deleted");
        Ok(())
    }
}
