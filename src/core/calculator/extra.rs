//! Overtime ("extra hours") for a single day.

use crate::errors::{AppError, AppResult};
use crate::models::time_of_day::TimeOfDay;
use crate::utils::time::{format_hm, minutes_between};
use std::fmt;

/// Regular workday length used when the configuration does not override it.
pub const DEFAULT_STANDARD_WORKDAY_MINUTES: u32 = 8 * 60;

/// Overtime of one day.
///
/// `NotApplicable` means entry or exit is missing: it is shown as "N/A"
/// and is never the same thing as zero overtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraDuration {
    NotApplicable,
    Minutes(i64),
}

impl ExtraDuration {
    pub fn minutes(&self) -> Option<i64> {
        match self {
            ExtraDuration::NotApplicable => None,
            ExtraDuration::Minutes(m) => Some(*m),
        }
    }
}

impl fmt::Display for ExtraDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtraDuration::NotApplicable => write!(f, "N/A"),
            ExtraDuration::Minutes(m) => write!(f, "{}", format_hm(*m)),
        }
    }
}

/// Overtime for a day given its four optional times.
///
/// Worked time is `exit - entry` minus the lunch break, which only counts
/// when both lunch times are present. Everything above `standard_minutes`
/// is overtime; less than that is zero overtime, never negative.
pub fn compute_extra_duration(
    entry: Option<TimeOfDay>,
    lunch_start: Option<TimeOfDay>,
    lunch_end: Option<TimeOfDay>,
    exit: Option<TimeOfDay>,
    standard_minutes: u32,
) -> AppResult<ExtraDuration> {
    if standard_minutes == 0 {
        return Err(AppError::InvalidInput(
            "standard workday length must be greater than zero".into(),
        ));
    }

    let (Some(entry), Some(exit)) = (entry, exit) else {
        return Ok(ExtraDuration::NotApplicable);
    };

    let worked = minutes_between(entry, exit);
    if worked < 0 {
        return Err(AppError::InvalidInput(format!(
            "exit {} is before entry {}",
            exit, entry
        )));
    }

    let lunch = match (lunch_start, lunch_end) {
        (Some(start), Some(end)) => {
            let m = minutes_between(start, end);
            if m < 0 {
                return Err(AppError::InvalidInput(format!(
                    "lunch end {} is before lunch start {}",
                    end, start
                )));
            }
            m
        }
        _ => 0,
    };

    let net = worked - lunch;
    let extra = (net - standard_minutes as i64).max(0);

    Ok(ExtraDuration::Minutes(extra))
}
