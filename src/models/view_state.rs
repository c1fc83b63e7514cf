use crate::models::birthdate::BirthDate;
use crate::models::view_mode::ViewMode;

/// UI-owned state handed to the calculator on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub birthdate: Option<BirthDate>,
}

impl ViewState {
    pub fn new(mode: ViewMode, birthdate: Option<BirthDate>) -> Self {
        Self { mode, birthdate }
    }
}
