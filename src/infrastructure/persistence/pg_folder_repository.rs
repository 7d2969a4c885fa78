//! PostgreSQL implementation of the folder repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Folder, FolderPatch, NewFolder};
use crate::domain::repositories::FolderRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `folder` table.
pub struct PgFolderRepository {
    pool: Arc<PgPool>,
}

impl PgFolderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FolderRepository for PgFolderRepository {
    async fn list(&self) -> Result<Vec<Folder>, AppError> {
        let folders = sqlx::query_as::<_, Folder>(
            r#"
            SELECT id, folder_name
            FROM folder
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(folders)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Folder>, AppError> {
        let folder = sqlx::query_as::<_, Folder>(
            r#"
            SELECT id, folder_name
            FROM folder
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(folder)
    }

    async fn create(&self, new_folder: NewFolder) -> Result<Folder, AppError> {
        let folder = sqlx::query_as::<_, Folder>(
            r#"
            INSERT INTO folder (folder_name)
            VALUES ($1)
            RETURNING id, folder_name
            "#,
        )
        .bind(new_folder.folder_name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(folder)
    }

    async fn update(&self, id: i64, patch: FolderPatch) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE folder SET
                folder_name = COALESCE($2::TEXT, folder_name)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(patch.folder_name)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        // Notes referencing this folder are removed by ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM folder WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
