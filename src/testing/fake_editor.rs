use std::cell::RefCell;

use crate::domain::{AppError, EditorSettings};
use crate::ports::EditorLauncher;

/// Records every launch instead of spawning anything.
#[derive(Default)]
pub struct FakeEditorLauncher {
    pub launches: RefCell<Vec<(EditorSettings, String)>>,
    pub should_fail: bool,
}

#[allow(dead_code)]
impl FakeEditorLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { should_fail: true, ..Self::default() }
    }
}

impl EditorLauncher for FakeEditorLauncher {
    fn open(&self, editor: &EditorSettings, path: &str) -> Result<(), AppError> {
        if self.should_fail {
            return Err(AppError::Editor {
                command: editor.command.clone(),
                details: "No such file or directory".to_string(),
            });
        }
        self.launches.borrow_mut().push((editor.clone(), path.to_string()));
        Ok(())
    }
}
