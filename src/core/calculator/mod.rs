//! Pure date/unit arithmetic behind both grids.
//!
//! Nothing in here reads the clock or holds state: every function is a
//! deterministic mapping from calendar dates (and configuration) to values.

pub mod age;
pub mod calendar;
pub mod cell;
pub mod life;
pub mod year;

pub use age::{AgeBreakdown, age_breakdown, age_in_years};
pub use cell::classify_cell;
pub use life::{LifeGrid, LifeHorizon, compute_life_grid};
pub use year::{YearGrid, compute_year_grid};
