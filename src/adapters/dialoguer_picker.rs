use dialoguer::Select;

use crate::domain::{AppError, TargetKind};
use crate::ports::KindPicker;

/// Arrow-key menu over every target kind.
///
/// dialoguer owns the terminal while the menu is up and restores it on
/// selection, cancel and error alike.
#[derive(Debug, Clone, Default)]
pub struct DialoguerKindPicker;

impl DialoguerKindPicker {
    pub fn new() -> Self {
        Self
    }
}

/// Menu labels in `TargetKind::ALL` order.
pub(crate) fn menu_items() -> Vec<String> {
    TargetKind::ALL
        .iter()
        .map(|kind| format!("{:<14} {}", kind.name(), kind.description()))
        .collect()
}

impl KindPicker for DialoguerKindPicker {
    fn pick(&self, path: &str) -> Result<Option<TargetKind>, AppError> {
        let items = menu_items();
        let selection = Select::new()
            .with_prompt(format!("Convert {} to", path))
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(|err| AppError::prompt(format!("Failed to select target type: {}", err)))?;

        Ok(selection.map(|index| TargetKind::ALL[index]))
    }
}
