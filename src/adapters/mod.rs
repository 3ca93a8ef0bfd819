pub mod dialoguer_picker;
pub mod local_filesystem;
pub mod process_editor;
