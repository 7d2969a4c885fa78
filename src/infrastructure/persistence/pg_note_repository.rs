//! PostgreSQL implementation of the note repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewNote, Note, NotePatch};
use crate::domain::repositories::NoteRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `note` table.
///
/// `modified` defaults to `NOW()` on insert and is never written afterwards.
pub struct PgNoteRepository {
    pool: Arc<PgPool>,
}

impl PgNoteRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn list(&self) -> Result<Vec<Note>, AppError> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, note_name, content, folder_id, modified
            FROM note
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(notes)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Note>, AppError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, note_name, content, folder_id, modified
            FROM note
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(note)
    }

    async fn create(&self, new_note: NewNote) -> Result<Note, AppError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO note (note_name, content, folder_id)
            VALUES ($1, $2, $3)
            RETURNING id, note_name, content, folder_id, modified
            "#,
        )
        .bind(new_note.note_name)
        .bind(new_note.content)
        .bind(new_note.folder_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(note)
    }

    async fn update(&self, id: i64, patch: NotePatch) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE note SET
                note_name = COALESCE($2::TEXT, note_name),
                folder_id = COALESCE($3::BIGINT, folder_id),
                content   = COALESCE($4::TEXT, content)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.note_name)
        .bind(patch.folder_id)
        .bind(patch.content)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM note WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
