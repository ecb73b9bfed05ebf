pub mod clear;
pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod report;
pub mod set;
pub mod show;

use crate::errors::{AppError, AppResult};
use crate::models::month_key::MonthKey;
use crate::utils::date;
use chrono::NaiveDate;

/// `--month` value, or the current month.
pub(crate) fn resolve_month(month: &Option<String>) -> AppResult<MonthKey> {
    match month {
        Some(m) => MonthKey::parse(m),
        None => Ok(MonthKey::current()),
    }
}

pub(crate) fn resolve_date(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}
