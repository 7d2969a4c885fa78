//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core data structures ([`entities::Folder`], [`entities::Note`])
//! - [`repositories`] - Data access trait definitions
//!
//! Repository traits report failures as [`crate::error::AppError`] and are
//! implemented over PostgreSQL in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
