use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Parse a calendar date in the wire format used everywhere (YYYY-MM-DD).
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}
