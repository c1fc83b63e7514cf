use serde::Serialize;

/// Classification of a single grid unit relative to the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Past,
    Current,
    Future,
}

impl CellState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellState::Past => "past",
            CellState::Current => "current",
            CellState::Future => "future",
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, CellState::Current)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub index: usize,
    pub state: CellState,
}
