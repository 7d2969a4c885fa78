//! Repository trait definitions for the domain layer.
//!
//! Traits define the data access contract; the PostgreSQL implementations live
//! in `crate::infrastructure::persistence`. Mock implementations are generated
//! with `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`FolderRepository`] - Folder CRUD
//! - [`NoteRepository`] - Note CRUD
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod folder_repository;
pub mod note_repository;

pub use folder_repository::FolderRepository;
pub use note_repository::NoteRepository;

#[cfg(test)]
pub use folder_repository::MockFolderRepository;
#[cfg(test)]
pub use note_repository::MockNoteRepository;
