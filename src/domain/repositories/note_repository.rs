//! Repository trait for note storage.

use crate::domain::entities::{NewNote, Note, NotePatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage accessor for the `note` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgNoteRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Returns every note in id order.
    async fn list(&self) -> Result<Vec<Note>, AppError>;

    /// Finds a note by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Note>, AppError>;

    /// Inserts a note and returns the stored row, including the store-assigned
    /// `id` and `modified` values.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when `folder_id` violates the foreign key
    /// or on any other database error.
    async fn create(&self, new_note: NewNote) -> Result<Note, AppError>;

    /// Overwrites the supplied fields, returning the number of rows affected.
    /// `modified` is left untouched.
    async fn update(&self, id: i64, patch: NotePatch) -> Result<u64, AppError>;

    /// Deletes a note, returning the number of rows affected.
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
}
