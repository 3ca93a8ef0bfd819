//! Project-level filesystem operations.
//!
//! Paths are passed through as given, relative to the working directory or
//! absolute. The port does not know about Phoenix conventions.

use crate::domain::AppError;

/// Port for the few filesystem operations the commands need.
pub trait ProjectFilesystem {
    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;
}
