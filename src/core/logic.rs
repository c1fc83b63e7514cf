use crate::core::calculator::{
    LifeGrid, LifeHorizon, YearGrid, compute_life_grid, compute_year_grid,
};
use crate::errors::AppResult;
use crate::models::cell::GridCell;
use crate::models::stats::Stats;
use crate::models::view_mode::ViewMode;
use crate::models::view_state::ViewState;
use chrono::NaiveDate;

/// Fully computed grid, ready for rendering or export.
#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Year(YearGrid),
    Life(LifeGrid),
}

impl GridView {
    pub fn mode(&self) -> ViewMode {
        match self {
            GridView::Year(_) => ViewMode::Year,
            GridView::Life(_) => ViewMode::Life,
        }
    }

    pub fn stats(&self) -> Stats {
        match self {
            GridView::Year(g) => g.stats(),
            GridView::Life(g) => g.stats(),
        }
    }

    pub fn cells(&self) -> &[GridCell] {
        match self {
            GridView::Year(g) => &g.cells,
            GridView::Life(g) => &g.cells,
        }
    }
}

pub struct Core;

impl Core {
    /// Compute the grid selected by `state` as seen on `reference`.
    pub fn build_view(
        state: &ViewState,
        reference: NaiveDate,
        horizon: LifeHorizon,
    ) -> AppResult<GridView> {
        match state.mode {
            ViewMode::Year => Ok(GridView::Year(compute_year_grid(reference))),
            ViewMode::Life => {
                let birthdate = state.birthdate.map(|b| b.date());
                let grid = compute_life_grid(birthdate, reference, horizon)?;
                Ok(GridView::Life(grid))
            }
        }
    }
}
