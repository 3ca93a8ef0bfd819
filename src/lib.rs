//! fawkes: jump between alternate files of a Phoenix project.
//!
//! The conversion engine in [`domain`] is pure; [`app`] wires it to the
//! filesystem, the editor and the command line.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AlternateOptions, AlternateOutcome, FileOutcome, OpenOutcome, alternate, alternate_at,
    editor_for, load_configuration, load_configuration_at, module_name, module_path,
};
pub use domain::{
    AppError, Configuration, ConversionError, ConversionResult, EditorSettings, PathResolver,
    ProjectLayout, StubOptions, TargetKind, TemplateSynthesizer,
};
