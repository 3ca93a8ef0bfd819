//! Configuration loading and editor selection.
//!
//! Pure schema parsing lives in `domain::config`; this module decides
//! which file to read and how the environment feeds in.

mod editor;
mod load_config;

pub use editor::resolve_editor;
pub use load_config::load_config;
