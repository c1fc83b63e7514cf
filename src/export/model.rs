// src/export/model.rs

use crate::core::logic::GridView;
use crate::models::stats::Stats;
use crate::models::view_mode::ViewMode;
use crate::ui::tooltip::describe_cell;
use chrono::NaiveDate;
use serde::Serialize;

/// One flat row per grid cell (CSV rows, JSON array items).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CellExport {
    pub index: usize,
    pub state: String,
    pub label: String,
    pub status: String,
}

/// Full JSON document: what was computed, for when, and every cell.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GridExport {
    pub view: ViewMode,
    pub reference: String,
    pub stats: Stats,
    pub cells: Vec<CellExport>,
}

impl GridExport {
    pub fn from_view(view: &GridView, reference: NaiveDate) -> Self {
        let cells = view
            .cells()
            .iter()
            .map(|cell| {
                let desc = describe_cell(view, cell.index);
                CellExport {
                    index: cell.index,
                    state: cell.state.as_str().to_string(),
                    label: desc.as_ref().map(|d| d.title.clone()).unwrap_or_default(),
                    status: desc.map(|d| d.status.to_string()).unwrap_or_default(),
                }
            })
            .collect();

        Self {
            view: view.mode(),
            reference: reference.format("%Y-%m-%d").to_string(),
            stats: view.stats(),
            cells,
        }
    }
}
