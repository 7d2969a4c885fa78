//! Shared application state handed to every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{FolderService, NoteService};
use crate::infrastructure::persistence::{PgFolderRepository, PgNoteRepository};

/// Services wired over one connection pool.
///
/// Cloning is cheap: every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub folder_service: Arc<FolderService<PgFolderRepository>>,
    pub note_service: Arc<NoteService<PgNoteRepository>>,
    pub db: Arc<PgPool>,
}

impl AppState {
    /// Builds repositories and services over `pool`.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let folder_repository = Arc::new(PgFolderRepository::new(pool.clone()));
        let note_repository = Arc::new(PgNoteRepository::new(pool.clone()));

        Self {
            folder_service: Arc::new(FolderService::new(folder_repository)),
            note_service: Arc::new(NoteService::new(note_repository)),
            db: pool,
        }
    }
}
