use std::process::{Command, Stdio};

use tracing::info;

use crate::domain::{AppError, EditorSettings};
use crate::ports::EditorLauncher;

/// Launches the editor as a detached child process.
#[derive(Debug, Clone, Default)]
pub struct ProcessEditorLauncher;

impl ProcessEditorLauncher {
    pub fn new() -> Self {
        Self
    }

    fn command_line(editor: &EditorSettings, path: &str) -> String {
        let mut parts = vec![editor.command.as_str()];
        parts.extend(editor.arguments.iter().map(String::as_str));
        parts.push(path);
        parts.join(" ")
    }
}

impl EditorLauncher for ProcessEditorLauncher {
    fn open(&self, editor: &EditorSettings, path: &str) -> Result<(), AppError> {
        let mut command = Command::new(&editor.command);
        command
            .args(&editor.arguments)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        command.spawn().map_err(|e| AppError::Editor {
            command: Self::command_line(editor, path),
            details: e.to_string(),
        })?;

        info!(command = %Self::command_line(editor, path), "launched editor");
        Ok(())
    }
}
