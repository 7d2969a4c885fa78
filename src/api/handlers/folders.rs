//! Handlers for folder endpoints.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::folder::{CreateFolderRequest, FolderItem, UpdateFolderRequest};
use crate::api::dto::json_or_empty;
use crate::api::handlers::{PathId, resource_id};
use crate::application::services::folder_service::FOLDER_NOT_FOUND;
use crate::domain::entities::NewFolder;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all folders.
///
/// # Endpoint
///
/// `GET /api/folder`
pub async fn folder_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<FolderItem>>, AppError> {
    let folders = state.folder_service.list_folders().await?;

    Ok(Json(folders.into_iter().map(FolderItem::from).collect()))
}

/// Creates a folder.
///
/// # Endpoint
///
/// `POST /api/folder`
///
/// Responds `201 Created` with a `Location` header pointing at the new folder.
///
/// # Errors
///
/// Returns 400 if `folder_name` is missing or the body is not valid JSON.
pub async fn create_folder_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let request = json_or_empty::<CreateFolderRequest>(&headers, &body)?;
    let new_folder = NewFolder::try_from(request)?;

    let folder = state.folder_service.create_folder(new_folder).await?;
    let location = format!("/api/folder/{}", folder.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(FolderItem::from(folder)),
    ))
}

/// Returns one folder.
///
/// # Endpoint
///
/// `GET /api/folder/{id}`
///
/// # Errors
///
/// Returns 404 if the folder does not exist.
pub async fn get_folder_handler(
    path: PathId,
    State(state): State<AppState>,
) -> Result<Json<FolderItem>, AppError> {
    let id = resource_id(path, FOLDER_NOT_FOUND)?;
    let folder = state.folder_service.get_folder(id).await?;

    Ok(Json(FolderItem::from(folder)))
}

/// Deletes a folder together with its notes.
///
/// # Endpoint
///
/// `DELETE /api/folder/{id}`
///
/// # Errors
///
/// Returns 404 if the folder does not exist.
pub async fn delete_folder_handler(
    path: PathId,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = resource_id(path, FOLDER_NOT_FOUND)?;
    state.folder_service.delete_folder(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Partially updates a folder.
///
/// # Endpoint
///
/// `PATCH /api/folder/{id}`
///
/// # Errors
///
/// Returns 404 if the folder does not exist.
/// Returns 400 if the body carries no `folder_name`.
pub async fn update_folder_handler(
    path: PathId,
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let id = resource_id(path, FOLDER_NOT_FOUND)?;
    let patch = match json_or_empty::<UpdateFolderRequest>(&headers, &body) {
        Ok(patch) => patch,
        Err(err) => {
            // A missing record outranks a malformed body.
            state.folder_service.get_folder(id).await?;
            return Err(err);
        }
    };

    state.folder_service.update_folder(id, patch.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}
