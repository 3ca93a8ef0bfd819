use std::cell::RefCell;

use crate::domain::{AppError, TargetKind};
use crate::ports::KindPicker;

/// Answers with a fixed choice and remembers the prompt path.
pub struct FakeKindPicker {
    choice: Option<TargetKind>,
    pub asked: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl FakeKindPicker {
    pub fn choosing(kind: TargetKind) -> Self {
        Self { choice: Some(kind), asked: RefCell::new(Vec::new()) }
    }

    pub fn cancelling() -> Self {
        Self { choice: None, asked: RefCell::new(Vec::new()) }
    }
}

impl KindPicker for FakeKindPicker {
    fn pick(&self, path: &str) -> Result<Option<TargetKind>, AppError> {
        self.asked.borrow_mut().push(path.to_string());
        Ok(self.choice)
    }
}
