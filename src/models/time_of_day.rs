use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wall-clock time without date or timezone (⇔ "HH:MM" in the stored JSON).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> AppResult<Self> {
        if hour > 23 {
            return Err(AppError::InvalidInput(format!(
                "hour {} out of range 0-23",
                hour
            )));
        }
        if minute > 59 {
            return Err(AppError::InvalidInput(format!(
                "minute {} out of range 0-59",
                minute
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Parse "HH:MM" (a single-digit hour such as "9:05" is accepted too).
    pub fn parse(s: &str) -> AppResult<Self> {
        let t = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| AppError::InvalidTime(s.to_string()))?;
        Ok(Self::from(t))
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn minutes_since_midnight(&self) -> i64 {
        (self.hour * 60 + self.minute) as i64
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = AppError;

    fn try_from(s: String) -> AppResult<Self> {
        Self::parse(&s)
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_padded() {
        let t = TimeOfDay::parse("9:05").unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 5);
        assert_eq!(t.to_string(), "09:05");
        assert_eq!(t.minutes_since_midnight(), 545);
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(matches!(
            TimeOfDay::new(24, 0),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            TimeOfDay::new(9, 60),
            Err(AppError::InvalidInput(_))
        ));
        assert!(TimeOfDay::new(23, 59).is_ok());
    }

    #[test]
    fn rejects_garbage_text() {
        assert!(matches!(
            TimeOfDay::parse("nine"),
            Err(AppError::InvalidTime(_))
        ));
        assert!(matches!(
            TimeOfDay::parse("25:00"),
            Err(AppError::InvalidTime(_))
        ));
    }
}
