//! Repository trait for folder storage.

use crate::domain::entities::{Folder, FolderPatch, NewFolder};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage accessor for the `folder` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgFolderRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FolderRepository: Send + Sync {
    /// Returns every folder in id order.
    async fn list(&self) -> Result<Vec<Folder>, AppError>;

    /// Finds a folder by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Folder>, AppError>;

    /// Inserts a folder and returns the stored row.
    async fn create(&self, new_folder: NewFolder) -> Result<Folder, AppError>;

    /// Overwrites the supplied fields, returning the number of rows affected.
    async fn update(&self, id: i64, patch: FolderPatch) -> Result<u64, AppError>;

    /// Deletes a folder (its notes go with it via the schema's cascade rule),
    /// returning the number of rows affected.
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
}
