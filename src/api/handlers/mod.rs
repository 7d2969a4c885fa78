//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod folders;
pub mod health;
pub mod notes;

pub use folders::{
    create_folder_handler, delete_folder_handler, folder_list_handler, get_folder_handler,
    update_folder_handler,
};
pub use health::health_handler;
pub use notes::{
    create_note_handler, delete_note_handler, get_note_handler, note_list_handler,
    update_note_handler,
};

use axum::extract::{Path, rejection::PathRejection};

use crate::error::AppError;

/// Extracted `{id}` path segment, kept fallible so a non-numeric id can be
/// reported with the resource's own not-found message.
pub type PathId = Result<Path<i64>, PathRejection>;

/// Resolves the `{id}` segment. An id that is not an integer cannot name a
/// stored row, so it is reported as not found.
pub fn resource_id(path: PathId, not_found_message: &str) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::not_found(not_found_message))
}
