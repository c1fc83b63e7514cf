//! Per-cell descriptions (what a hover tooltip shows in a graphical front end).

use crate::core::calculator::{LifeGrid, YearGrid};
use crate::core::logic::GridView;
use crate::models::cell::CellState;
use crate::utils::date::month_name;
use chrono::Datelike;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellDescription {
    pub index: usize,
    pub title: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl fmt::Display for CellDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title, self.status)?;
        if let Some(detail) = &self.detail {
            write!(f, "\n{}", detail)?;
        }
        Ok(())
    }
}

pub fn life_status(state: CellState) -> &'static str {
    match state {
        CellState::Past => "Lived",
        CellState::Current => "Now",
        CellState::Future => "Future",
    }
}

pub fn year_status(state: CellState) -> &'static str {
    match state {
        CellState::Past => "Passed",
        CellState::Current => "Today",
        CellState::Future => "Upcoming",
    }
}

/// "Year 3, Week 12" plus the status word; `None` outside the grid.
pub fn describe_life_cell(grid: &LifeGrid, index: usize) -> Option<CellDescription> {
    let cell = grid.cells.get(index)?;
    let (year, week) = grid.cell_position(index);

    Some(CellDescription {
        index,
        title: format!("Year {}, Week {}", year + 1, week + 1),
        status: life_status(cell.state),
        detail: grid
            .week_start(index)
            .map(|d| format!("Starts {}", d.format("%Y-%m-%d"))),
    })
}

/// "Mar 14" plus the status word; `None` outside the grid.
pub fn describe_year_cell(grid: &YearGrid, index: usize) -> Option<CellDescription> {
    let cell = grid.cells.get(index)?;
    let date = grid.date_of(index)?;

    Some(CellDescription {
        index,
        title: format!("{} {}", month_name(date.month()), date.day()),
        status: year_status(cell.state),
        detail: Some(date.format("%A").to_string()),
    })
}

pub fn describe_cell(view: &GridView, index: usize) -> Option<CellDescription> {
    match view {
        GridView::Year(g) => describe_year_cell(g, index),
        GridView::Life(g) => describe_life_cell(g, index),
    }
}
