//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a single call per
//! operation: the existence guard, payload validation and the store mutation
//! happen together.
//!
//! # Available Services
//!
//! - [`services::folder_service::FolderService`] - Folder CRUD
//! - [`services::note_service::NoteService`] - Note CRUD

pub mod services;
