//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx
//! parameterized queries.
//!
//! # Repositories
//!
//! - [`PgFolderRepository`] - Folder storage and retrieval
//! - [`PgNoteRepository`] - Note storage and retrieval

pub mod pg_folder_repository;
pub mod pg_note_repository;

pub use pg_folder_repository::PgFolderRepository;
pub use pg_note_repository::PgNoteRepository;
