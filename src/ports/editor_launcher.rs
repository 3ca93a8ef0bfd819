use crate::domain::{AppError, EditorSettings};

/// Port for handing a file to the user's editor.
pub trait EditorLauncher {
    /// Start `editor` on `path` without waiting for it to exit.
    fn open(&self, editor: &EditorSettings, path: &str) -> Result<(), AppError>;
}
