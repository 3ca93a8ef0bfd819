use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// In-memory filesystem keyed by the path string as given.
#[derive(Default)]
pub struct MemoryFilesystem {
    files: RefCell<BTreeMap<String, String>>,
}

#[allow(dead_code)]
impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.borrow_mut().insert(path.to_string(), content.to_string());
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    pub fn paths(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl ProjectFilesystem for MemoryFilesystem {
    fn file_exists(&self, path: &str) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.content(path)
            .ok_or_else(|| AppError::Io(io::Error::new(io::ErrorKind::NotFound, path.to_string())))
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.files.borrow_mut().insert(path.to_string(), content.to_string());
        Ok(())
    }
}
