//! Path conversion between alternate files of a Phoenix project.

mod components;
mod detect;
mod directory;
mod rules;

use serde::Serialize;
use thiserror::Error;

use super::TargetKind;
use super::layout::ProjectLayout;

pub use components::PathComponents;
pub(crate) use components::FileName;

/// Failures of the conversion engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The last segment of the input has no extension. Carries the input unmodified.
    #[error("Invalid path: {0}. Path must contain a valid filename.")]
    InvalidPath(String),

    /// Strict conversion found nothing to rewrite.
    #[error("Cannot convert {from} to {to} type")]
    UnsupportedConversion { from: String, to: TargetKind },
}

/// Outcome of a single conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub path: String,
    pub kind: TargetKind,
    pub original_path: String,
}

/// Rewrites paths according to a [`ProjectLayout`].
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    layout: ProjectLayout,
}

impl PathResolver {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Convert `path` to its alternate of kind `kind`.
    ///
    /// Only fails when the last segment carries no extension. Paths a rule
    /// cannot anchor on come back unchanged.
    pub fn convert(&self, path: &str, kind: TargetKind) -> Result<ConversionResult, ConversionError> {
        let components = PathComponents::parse(path)?;
        let segments = rules::apply(components.segments(), kind, &self.layout);
        Ok(ConversionResult {
            path: components.with_segments(segments).render(),
            kind,
            original_path: path.to_string(),
        })
    }

    /// Like [`convert`](Self::convert), but an unchanged path whose detected
    /// kind differs from `kind` is an error.
    pub fn convert_checked(
        &self,
        path: &str,
        kind: TargetKind,
    ) -> Result<ConversionResult, ConversionError> {
        let result = self.convert(path, kind)?;
        if result.path == path && self.detect_kind(path) != Some(kind) {
            return Err(ConversionError::UnsupportedConversion { from: path.to_string(), to: kind });
        }
        Ok(result)
    }

    /// Best guess at the kind of file `path` names.
    pub fn detect_kind(&self, path: &str) -> Option<TargetKind> {
        let components = PathComponents::parse(path).ok()?;
        detect::detect(components.segments(), &self.layout)
    }
}
