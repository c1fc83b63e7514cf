use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

pub const ISO_DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ISO_DATE_PATTERN).expect("ISO date pattern compiles"));

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Shape check only: `YYYY-MM-DD` with digits, nothing else.
pub fn is_iso_date_format(s: &str) -> bool {
    ISO_DATE_RE.is_match(s)
}

/// Resolve the reference date: an explicit `--today` override or the local clock.
pub fn resolve_reference(over: Option<&str>) -> AppResult<NaiveDate> {
    match over {
        None => Ok(today()),
        Some(s) => {
            let s = s.trim();
            if !is_iso_date_format(s) {
                return Err(AppError::InvalidDate(s.to_string()));
            }
            parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
        }
    }
}

/// Short month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("???")
}
