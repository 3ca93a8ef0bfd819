mod fake_editor;
mod fake_picker;
mod memory_filesystem;

pub use fake_editor::FakeEditorLauncher;
pub use fake_picker::FakeKindPicker;
pub use memory_filesystem::MemoryFilesystem;
