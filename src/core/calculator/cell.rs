use crate::models::cell::{CellState, GridCell};

/// Shared cell policy for every grid.
///
/// `elapsed` is the number of fully completed units; the unit at that index
/// is the one containing the reference date. When `elapsed` is past the end
/// of the grid no index matches and no cell is `Current`.
pub fn classify_cell(index: usize, elapsed: usize) -> CellState {
    if index < elapsed {
        CellState::Past
    } else if index == elapsed {
        CellState::Current
    } else {
        CellState::Future
    }
}

/// Build `total` cells classified against `elapsed`.
pub(crate) fn build_cells(total: usize, elapsed: usize) -> Vec<GridCell> {
    (0..total)
        .map(|index| GridCell {
            index,
            state: classify_cell(index, elapsed),
        })
        .collect()
}
