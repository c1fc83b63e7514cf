use serde::Serialize;

/// Summary numbers shown under a grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub units_elapsed: u32,
    pub units_total: u32,
    pub percent_complete: f64,
    /// Whole years; only set for the life view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_years: Option<i32>,
}
