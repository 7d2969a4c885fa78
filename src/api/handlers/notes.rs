//! Handlers for note endpoints.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};

use crate::api::dto::json_or_empty;
use crate::api::dto::note::{CreateNoteRequest, NoteItem, UpdateNoteRequest};
use crate::api::handlers::{PathId, resource_id};
use crate::application::services::note_service::NOTE_NOT_FOUND;
use crate::domain::entities::NewNote;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all notes.
///
/// # Endpoint
///
/// `GET /api/note`
pub async fn note_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<NoteItem>>, AppError> {
    let notes = state.note_service.list_notes().await?;

    Ok(Json(notes.into_iter().map(NoteItem::from).collect()))
}

/// Creates a note.
///
/// # Endpoint
///
/// `POST /api/note`
///
/// # Errors
///
/// Returns 400 if `note_name` or `folder_id` is missing.
/// Returns 500 if `folder_id` does not reference a folder.
pub async fn create_note_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let request = json_or_empty::<CreateNoteRequest>(&headers, &body)?;
    let new_note = NewNote::try_from(request)?;

    let note = state.note_service.create_note(new_note).await?;
    let location = format!("/api/note/{}", note.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(NoteItem::from(note)),
    ))
}

/// Returns one note.
///
/// # Endpoint
///
/// `GET /api/note/{id}`
pub async fn get_note_handler(
    path: PathId,
    State(state): State<AppState>,
) -> Result<Json<NoteItem>, AppError> {
    let id = resource_id(path, NOTE_NOT_FOUND)?;
    let note = state.note_service.get_note(id).await?;

    Ok(Json(NoteItem::from(note)))
}

/// Deletes a note.
///
/// # Endpoint
///
/// `DELETE /api/note/{id}`
pub async fn delete_note_handler(
    path: PathId,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = resource_id(path, NOTE_NOT_FOUND)?;
    state.note_service.delete_note(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Partially updates a note.
///
/// # Endpoint
///
/// `PATCH /api/note/{id}`
///
/// Only supplied fields change; `modified` keeps its creation time.
///
/// # Errors
///
/// Returns 404 if the note does not exist.
/// Returns 400 if none of `note_name`, `folder_id`, `content` is supplied.
pub async fn update_note_handler(
    path: PathId,
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let id = resource_id(path, NOTE_NOT_FOUND)?;
    let patch = match json_or_empty::<UpdateNoteRequest>(&headers, &body) {
        Ok(patch) => patch,
        Err(err) => {
            // A missing record outranks a malformed body.
            state.note_service.get_note(id).await?;
            return Err(err);
        }
    };

    state.note_service.update_note(id, patch.into()).await?;

    Ok(StatusCode::NO_CONTENT)
}
