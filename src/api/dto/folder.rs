//! DTOs for folder endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Folder, FolderPatch, NewFolder};
use crate::error::AppError;
use crate::utils::sanitize::sanitize_html;

/// Wire representation of a folder. `folder_name` is sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderItem {
    pub id: i64,
    pub folder_name: String,
}

impl From<Folder> for FolderItem {
    fn from(folder: Folder) -> Self {
        Self {
            id: folder.id,
            folder_name: sanitize_html(&folder.folder_name),
        }
    }
}

/// Request body for `POST /api/folder`.
///
/// Fields are optional at the serde level so that a missing field surfaces
/// as `Missing '<field>' in request body` rather than a parser error.
#[derive(Debug, Default, Deserialize)]
pub struct CreateFolderRequest {
    pub folder_name: Option<String>,
}

impl TryFrom<CreateFolderRequest> for NewFolder {
    type Error = AppError;

    fn try_from(request: CreateFolderRequest) -> Result<Self, Self::Error> {
        let folder_name = request
            .folder_name
            .ok_or_else(|| AppError::missing_field("folder_name"))?;

        Ok(NewFolder { folder_name })
    }
}

/// Request body for `PATCH /api/folder/{id}`. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateFolderRequest {
    pub folder_name: Option<String>,
}

impl From<UpdateFolderRequest> for FolderPatch {
    fn from(request: UpdateFolderRequest) -> Self {
        FolderPatch {
            folder_name: request.folder_name,
        }
    }
}
