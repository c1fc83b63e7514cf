use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::{Months, NaiveDate};
use std::fmt;

/// A validated birthdate: a real calendar date that is not after the
/// reference date it was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Validate a `YYYY-MM-DD` string against `reference` ("today").
    ///
    /// Rejects malformed strings, impossible calendar dates (2023-02-30) and
    /// dates after `reference`.
    pub fn parse(input: &str, reference: NaiveDate) -> AppResult<Self> {
        let trimmed = input.trim();

        if trimmed.is_empty() {
            return Err(AppError::InvalidInput("birthdate is empty".into()));
        }

        if !date::is_iso_date_format(trimmed) {
            return Err(AppError::InvalidInput(format!(
                "'{trimmed}' is not in YYYY-MM-DD format"
            )));
        }

        let parsed = date::parse_date(trimmed).ok_or_else(|| {
            AppError::InvalidInput(format!("'{trimmed}' is not a valid calendar date"))
        })?;

        Self::from_date(parsed, reference)
    }

    /// Wrap an already parsed date, enforcing the "not in the future" rule.
    pub fn from_date(d: NaiveDate, reference: NaiveDate) -> AppResult<Self> {
        if d > reference {
            return Err(AppError::InvalidInput(format!(
                "birthdate {d} is after the reference date {reference}"
            )));
        }
        Ok(Self(d))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// False when the birthdate lies further back than `lifespan_years`
    /// before `reference`, i.e. the whole grid would already be filled.
    pub fn check_within_horizon(&self, lifespan_years: u32, reference: NaiveDate) -> bool {
        match reference.checked_sub_months(Months::new(lifespan_years.saturating_mul(12))) {
            Some(min) => self.0 >= min,
            None => true,
        }
    }

    /// Storage representation (`YYYY-MM-DD`).
    pub fn to_storage(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
