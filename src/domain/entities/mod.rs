//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Folder`] - A named grouping container for notes
//! - [`Note`] - A text record belonging to one folder
//!
//! Each entity comes with a `New*` struct for inserts and a `*Patch` struct
//! for partial updates.

pub mod folder;
pub mod note;

pub use folder::{Folder, FolderPatch, NewFolder};
pub use note::{NewNote, Note, NotePatch};
