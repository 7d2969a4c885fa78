//! Business logic services for the application layer.

pub mod folder_service;
pub mod note_service;

pub use folder_service::FolderService;
pub use note_service::NoteService;
