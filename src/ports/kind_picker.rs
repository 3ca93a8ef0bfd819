use crate::domain::{AppError, TargetKind};

/// Port for asking the user which kind to convert to.
pub trait KindPicker {
    /// `Ok(None)` when the user cancels.
    fn pick(&self, path: &str) -> Result<Option<TargetKind>, AppError>;
}
