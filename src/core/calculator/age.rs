//! Calendar-correct age: whole years, and a years/months/days breakdown
//! anchored on the birthdate's monthly anniversaries.

use crate::core::calculator::calendar::days_between;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Whole years between `birthdate` and `reference`.
///
/// A year only counts once the birthday's month/day has been reached, so
/// 2000-03-15 is 23 on 2024-03-14 and 24 on 2024-03-15.
pub fn age_in_years(birthdate: NaiveDate, reference: NaiveDate) -> i32 {
    let mut age = reference.year() - birthdate.year();
    if (reference.month(), reference.day()) < (birthdate.month(), birthdate.day()) {
        age -= 1;
    }
    age
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// The date `months` after `birthdate`. A birth day the target month does
/// not have (Jan 31 + 1 month) falls on the first day of the month after.
fn monthly_anniversary(birthdate: NaiveDate, months: u32) -> Option<NaiveDate> {
    let clamped = birthdate.checked_add_months(Months::new(months))?;
    if clamped.day() == birthdate.day() {
        Some(clamped)
    } else {
        clamped.checked_add_days(Days::new(1))
    }
}

/// Age as years, months and days.
///
/// Counts the whole months whose anniversary has been reached, then the
/// calendar days since the last one. 2024-01-31 to 2024-03-01 is one month
/// (Jan 31 + 1 month rolls to Mar 1) and no days.
pub fn age_breakdown(birthdate: NaiveDate, reference: NaiveDate) -> AgeBreakdown {
    let span = (reference.year() - birthdate.year()) * 12 + reference.month() as i32
        - birthdate.month() as i32;
    let mut months = u32::try_from(span).unwrap_or(0);

    while months > 0 && monthly_anniversary(birthdate, months).is_none_or(|d| d > reference) {
        months -= 1;
    }

    let last = monthly_anniversary(birthdate, months).unwrap_or(birthdate);
    let days = i32::try_from(days_between(last, reference).max(0)).unwrap_or(0);

    AgeBreakdown {
        years: (months / 12) as i32,
        months: (months % 12) as i32,
        days,
    }
}

fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

impl fmt::Display for AgeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}
