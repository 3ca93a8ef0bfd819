//! API Facade for the application.
//!
//! This module glues context creation, configuration lookup and command
//! execution together for the CLI and for library callers.

use std::path::{Path, PathBuf};

use crate::adapters::local_filesystem::LocalFilesystem;
use crate::adapters::process_editor::ProcessEditorLauncher;
use crate::app::commands::{alternate as alternate_command, module_name as module_name_command};
use crate::app::{AppContext, config};

pub use crate::app::commands::alternate::{
    AlternateOptions, AlternateOutcome, FileOutcome, OpenOutcome,
};
pub use crate::domain::{AppError, Configuration, ConversionResult, EditorSettings, TargetKind};

/// Create an `AppContext` rooted at `root`.
fn create_context(
    root: PathBuf,
    config: &Configuration,
) -> AppContext<LocalFilesystem, ProcessEditorLauncher> {
    AppContext::new(LocalFilesystem::new(root), ProcessEditorLauncher::new(), config)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").filter(|home| !home.is_empty()).map(PathBuf::from)
}

/// Load configuration for the current directory and `$HOME`.
pub fn load_configuration() -> Result<Configuration, AppError> {
    let cwd = std::env::current_dir()?;
    Ok(load_configuration_at(&cwd, home_dir().as_deref()))
}

/// Load configuration for an explicit project directory and home.
pub fn load_configuration_at(root: &Path, home: Option<&Path>) -> Configuration {
    let filesystem = LocalFilesystem::new(root.to_path_buf());
    config::load_config(&filesystem, root, home)
}

/// Editor for `--open`, honoring `--editor`, config, `$EDITOR` and `$VISUAL`.
pub fn editor_for(flag: Option<&str>, config: &Configuration) -> EditorSettings {
    config::resolve_editor(flag, config.editor.as_ref(), |key| std::env::var(key).ok())
}

/// Run the `alternate` command in the current directory.
pub fn alternate(
    config: &Configuration,
    options: AlternateOptions,
) -> Result<AlternateOutcome, AppError> {
    alternate_at(std::env::current_dir()?, config, options)
}

/// Run the `alternate` command with files resolved against `root`.
pub fn alternate_at(
    root: impl Into<PathBuf>,
    config: &Configuration,
    options: AlternateOptions,
) -> Result<AlternateOutcome, AppError> {
    let ctx = create_context(root.into(), config);
    alternate_command::execute(&ctx, options)
}

/// Elixir module name for a file path under the configured layout.
pub fn module_name(config: &Configuration, path: &str) -> String {
    module_name_command::module_name(path, &config.layout())
}

/// File path for an Elixir module name. Missing `root`/`extension` fall
/// back to the configured lib directory and source extension.
pub fn module_path(
    config: &Configuration,
    module: &str,
    root: Option<&str>,
    extension: Option<&str>,
) -> String {
    module_name_command::module_path(module, root, extension, &config.layout())
}
