//! Folder entity: a named container for notes.

use sqlx::FromRow;

/// A stored folder row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Folder {
    pub id: i64,
    pub folder_name: String,
}

impl Folder {
    pub fn new(id: i64, folder_name: String) -> Self {
        Self { id, folder_name }
    }
}

/// Input data for creating a new folder. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewFolder {
    pub folder_name: String,
}

/// Partial update for an existing folder.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct FolderPatch {
    pub folder_name: Option<String>,
}

impl FolderPatch {
    /// Returns true when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.folder_name.is_none()
    }
}
