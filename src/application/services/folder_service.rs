//! Folder management service.

use crate::domain::entities::{Folder, FolderPatch, NewFolder};
use crate::domain::repositories::FolderRepository;
use crate::error::AppError;
use std::sync::Arc;

pub const FOLDER_NOT_FOUND: &str = "Folder doesn't exist";
pub const FOLDER_PATCH_REQUIRED: &str = "Request body must contain 'folder_name'";

/// Service for folder CRUD.
///
/// Every operation addressed by id first resolves the folder, so a missing
/// id is reported as [`AppError::NotFound`] before any body validation.
pub struct FolderService<R: FolderRepository> {
    repository: Arc<R>,
}

impl<R: FolderRepository> FolderService<R> {
    /// Creates a new folder service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all folders in id order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_folders(&self) -> Result<Vec<Folder>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a folder by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the folder does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_folder(&self, id: i64) -> Result<Folder, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(FOLDER_NOT_FOUND))
    }

    /// Creates a new folder.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_folder(&self, new_folder: NewFolder) -> Result<Folder, AppError> {
        let folder = self.repository.create(new_folder).await?;
        tracing::info!(folder_id = folder.id, "Folder created");
        Ok(folder)
    }

    /// Applies a partial update to an existing folder.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the folder does not exist.
    /// Returns [`AppError::Validation`] if the patch carries no field.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_folder(&self, id: i64, patch: FolderPatch) -> Result<(), AppError> {
        self.get_folder(id).await?;

        if patch.is_empty() {
            return Err(AppError::bad_request(FOLDER_PATCH_REQUIRED));
        }

        // The row can vanish between the lookup and the update.
        if self.repository.update(id, patch).await? == 0 {
            return Err(AppError::not_found(FOLDER_NOT_FOUND));
        }

        tracing::info!(folder_id = id, "Folder updated");
        Ok(())
    }

    /// Deletes a folder. Its notes are removed by the store's cascade rule.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the folder does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_folder(&self, id: i64) -> Result<(), AppError> {
        self.get_folder(id).await?;

        if self.repository.delete(id).await? == 0 {
            return Err(AppError::not_found(FOLDER_NOT_FOUND));
        }

        tracing::info!(folder_id = id, "Folder deleted");
        Ok(())
    }
}
