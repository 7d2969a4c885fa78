//! API route configuration.

use crate::api::handlers::{
    create_folder_handler, create_note_handler, delete_folder_handler, delete_note_handler,
    folder_list_handler, get_folder_handler, get_note_handler, note_list_handler,
    update_folder_handler, update_note_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All resource routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /folder`        - List folders
/// - `POST   /folder`        - Create a folder
/// - `GET    /folder/{id}`   - Fetch one folder
/// - `DELETE /folder/{id}`   - Delete a folder and its notes
/// - `PATCH  /folder/{id}`   - Rename a folder
/// - `GET    /note`          - List notes
/// - `POST   /note`          - Create a note
/// - `GET    /note/{id}`     - Fetch one note
/// - `DELETE /note/{id}`     - Delete a note
/// - `PATCH  /note/{id}`     - Partially update a note
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/folder",
            get(folder_list_handler).post(create_folder_handler),
        )
        .route(
            "/folder/{id}",
            get(get_folder_handler)
                .delete(delete_folder_handler)
                .patch(update_folder_handler),
        )
        .route("/note", get(note_list_handler).post(create_note_handler))
        .route(
            "/note/{id}",
            get(get_note_handler)
                .delete(delete_note_handler)
                .patch(update_note_handler),
        )
}
