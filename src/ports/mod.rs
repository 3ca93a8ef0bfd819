mod editor_launcher;
mod kind_picker;
mod project_filesystem;

pub use editor_launcher::EditorLauncher;
pub use kind_picker::KindPicker;
pub use project_filesystem::ProjectFilesystem;
