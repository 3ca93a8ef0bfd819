mod model;
mod parse;
pub mod paths;

pub use model::{Configuration, EditorSettings, FileExtensions, PathFormats};
pub use parse::parse_config_content;
