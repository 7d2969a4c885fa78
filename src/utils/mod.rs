//! Utility functions shared across layers.
//!
//! - [`sanitize`] - Allow-list HTML filter applied to outgoing text fields

pub mod sanitize;
