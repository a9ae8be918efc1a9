use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `YYYY-MM-DD`, or the current local date when absent.
pub fn parse_date_or_today(s: Option<&str>) -> AppResult<NaiveDate> {
    match s {
        None => Ok(today()),
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}
