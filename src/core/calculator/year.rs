use crate::core::calculator::calendar::days_in_year;
use crate::core::calculator::cell::build_cells;
use crate::models::cell::GridCell;
use crate::models::stats::Stats;
use chrono::{Datelike, NaiveDate};

/// Day-of-year grid for the reference date's calendar year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearGrid {
    pub cells: Vec<GridCell>,
    /// Days completed before the reference date (0 on Jan 1).
    pub days_elapsed: u32,
    pub days_total: u32,
    /// Days remaining after the reference date.
    pub days_left: u32,
    pub year: i32,
}

pub fn compute_year_grid(reference: NaiveDate) -> YearGrid {
    let year = reference.year();
    let days_total = days_in_year(year);

    // ordinal0 is the calendar-day distance from Jan 1 of the same year.
    let days_elapsed = reference.ordinal0();
    let days_left = days_total.saturating_sub(days_elapsed + 1);

    YearGrid {
        cells: build_cells(days_total as usize, days_elapsed as usize),
        days_elapsed,
        days_total,
        days_left,
        year,
    }
}

impl YearGrid {
    /// Stats for the year view. Today counts as passed in the percentage,
    /// so Dec 31 reads 100%.
    pub fn stats(&self) -> Stats {
        let passed = (self.days_elapsed + 1).min(self.days_total);
        Stats {
            units_elapsed: self.days_elapsed,
            units_total: self.days_total,
            percent_complete: f64::from(passed) / f64::from(self.days_total) * 100.0,
            age_years: None,
        }
    }

    /// Calendar date of the cell at `index`, if it belongs to this year.
    pub fn date_of(&self, index: usize) -> Option<NaiveDate> {
        let ordinal = u32::try_from(index).ok()?.checked_add(1)?;
        NaiveDate::from_yo_opt(self.year, ordinal)
    }
}
