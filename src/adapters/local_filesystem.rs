//! `ProjectFilesystem` implementation backed by `std::fs`.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// Filesystem rooted at a working directory. Absolute paths bypass the root.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl ProjectFilesystem for LocalFilesystem {
    fn file_exists(&self, path: &str) -> bool {
        self.resolve_path(path).exists()
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        fs::read_to_string(self.resolve_path(path)).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        debug!(path = %full_path.display(), bytes = content.len(), "writing file");
        fs::write(full_path, content).map_err(AppError::from)
    }
}
