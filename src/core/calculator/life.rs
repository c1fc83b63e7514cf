use crate::core::calculator::age::{AgeBreakdown, age_breakdown, age_in_years};
use crate::core::calculator::calendar::days_between;
use crate::core::calculator::cell::build_cells;
use crate::errors::{AppError, AppResult};
use crate::models::cell::GridCell;
use crate::models::stats::Stats;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIFESPAN_YEARS: u32 = 90;
pub const DEFAULT_WEEKS_PER_YEAR: u32 = 52;
/// Largest grid accepted: 200 rows of one cell per day.
pub const MAX_TOTAL_WEEKS: u32 = 200 * 366;

/// Size of the life grid: `lifespan_years` rows of `weeks_per_year` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeHorizon {
    pub lifespan_years: u32,
    pub weeks_per_year: u32,
}

impl Default for LifeHorizon {
    fn default() -> Self {
        Self {
            lifespan_years: DEFAULT_LIFESPAN_YEARS,
            weeks_per_year: DEFAULT_WEEKS_PER_YEAR,
        }
    }
}

impl LifeHorizon {
    pub fn new(lifespan_years: u32, weeks_per_year: u32) -> Self {
        Self {
            lifespan_years,
            weeks_per_year,
        }
    }

    pub fn total_weeks(&self) -> AppResult<u32> {
        if self.lifespan_years == 0 || self.weeks_per_year == 0 {
            return Err(AppError::InvalidInput(format!(
                "life horizon must be positive (got {} years × {} weeks)",
                self.lifespan_years, self.weeks_per_year
            )));
        }

        match self.lifespan_years.checked_mul(self.weeks_per_year) {
            Some(total) if total <= MAX_TOTAL_WEEKS => Ok(total),
            _ => Err(AppError::InvalidInput(format!(
                "life horizon is too large ({} years × {} weeks, at most {} cells)",
                self.lifespan_years, self.weeks_per_year, MAX_TOTAL_WEEKS
            ))),
        }
    }
}

/// Week grid of a whole configured lifespan.
#[derive(Debug, Clone, PartialEq)]
pub struct LifeGrid {
    pub cells: Vec<GridCell>,
    pub weeks_elapsed: u32,
    pub weeks_total: u32,
    pub weeks_left: u32,
    pub age: i32,
    pub horizon: LifeHorizon,
    pub birthdate: NaiveDate,
    pub reference: NaiveDate,
}

/// Compute the life grid for `birthdate` as seen on `reference`.
///
/// Fails with `InvalidInput` when no birthdate is configured, when it lies
/// after `reference`, or when the horizon is empty.
pub fn compute_life_grid(
    birthdate: Option<NaiveDate>,
    reference: NaiveDate,
    horizon: LifeHorizon,
) -> AppResult<LifeGrid> {
    let birthdate =
        birthdate.ok_or_else(|| AppError::InvalidInput("no birthdate configured".into()))?;

    if birthdate > reference {
        return Err(AppError::InvalidInput(format!(
            "birthdate {birthdate} is after the reference date {reference}"
        )));
    }

    let weeks_total = horizon.total_weeks()?;

    let days = days_between(birthdate, reference);
    let weeks_elapsed = u32::try_from(days / 7)
        .map_err(|_| AppError::InvalidInput(format!("{days} days is out of range")))?;

    Ok(LifeGrid {
        cells: build_cells(weeks_total as usize, weeks_elapsed as usize),
        weeks_elapsed,
        weeks_total,
        weeks_left: weeks_total.saturating_sub(weeks_elapsed),
        age: age_in_years(birthdate, reference),
        horizon,
        birthdate,
        reference,
    })
}

impl LifeGrid {
    pub fn stats(&self) -> Stats {
        let lived = self.weeks_elapsed.min(self.weeks_total);
        Stats {
            units_elapsed: self.weeks_elapsed,
            units_total: self.weeks_total,
            percent_complete: f64::from(lived) / f64::from(self.weeks_total) * 100.0,
            age_years: Some(self.age),
        }
    }

    pub fn age_breakdown(&self) -> AgeBreakdown {
        age_breakdown(self.birthdate, self.reference)
    }

    /// First day of the week represented by the cell at `index`.
    pub fn week_start(&self, index: usize) -> Option<NaiveDate> {
        let offset = u64::try_from(index).ok()?.checked_mul(7)?;
        self.birthdate.checked_add_days(Days::new(offset))
    }

    /// Zero-based (year, week) position of a cell in the row-major layout.
    pub fn cell_position(&self, index: usize) -> (usize, usize) {
        let per_row = self.horizon.weeks_per_year as usize;
        (index / per_row, index % per_row)
    }
}
