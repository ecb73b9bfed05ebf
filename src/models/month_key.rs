use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Direction for month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Identifies the calendar month a set of day records belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(AppError::InvalidMonth(format!("{}-{}", year, month)));
        }
        Ok(Self { year, month })
    }

    pub fn of(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(date::today())
    }

    /// Parse "YYYY-MM".
    pub fn parse(s: &str) -> AppResult<Self> {
        let (y, m) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| AppError::InvalidMonth(s.to_string()))?;
        if y.len() != 4 || m.is_empty() || m.len() > 2 {
            return Err(AppError::InvalidMonth(s.to_string()));
        }
        let year: i32 = y.parse().map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        let month: u32 = m.parse().map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        Self::new(year, month).map_err(|_| AppError::InvalidMonth(s.to_string()))
    }

    /// Parse the storage key back ("time_records_2024_10").
    pub fn from_storage_key(key: &str) -> Option<Self> {
        let rest = key.strip_prefix("time_records_")?;
        let (y, m) = rest.split_once('_')?;
        Self::new(y.parse().ok()?, m.parse().ok()?).ok()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Key under which the month blob is stored (month is not zero padded).
    pub fn storage_key(&self) -> String {
        format!("time_records_{}_{}", self.year, self.month)
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn step(&self, direction: Direction) -> Self {
        match direction {
            Direction::Prev => self.prev(),
            Direction::Next => self.next(),
        }
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        d.year() == self.year && d.month() == self.month
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        date::all_days_of_month(self.year, self.month)
    }

    /// "October 2024"
    pub fn label(&self) -> String {
        format!("{} {}", date::month_name(self.month), self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_is_unpadded() {
        let k = MonthKey::parse("2024-03").unwrap();
        assert_eq!(k.storage_key(), "time_records_2024_3");
        assert_eq!(MonthKey::from_storage_key("time_records_2024_3"), Some(k));
        assert_eq!(k.to_string(), "2024-03");
    }

    #[test]
    fn navigation_wraps_years() {
        let jan = MonthKey::new(2025, 1).unwrap();
        assert_eq!(jan.prev(), MonthKey::new(2024, 12).unwrap());
        assert_eq!(jan.prev().next(), jan);
        assert_eq!(MonthKey::new(2024, 12).unwrap().step(Direction::Next), jan);
    }

    #[test]
    fn rejects_bad_months() {
        assert!(MonthKey::parse("2024-13").is_err());
        assert!(MonthKey::parse("2024").is_err());
        assert!(MonthKey::parse("24-10").is_err());
    }
}
