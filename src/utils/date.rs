use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Current calendar date in local time.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Resolve the clock: an explicit `--today` override, or the local date.
pub fn resolve_today(override_date: Option<&str>) -> AppResult<NaiveDate> {
    match override_date {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(today()),
    }
}
