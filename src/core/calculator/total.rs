use crate::core::calculator::extra::{ExtraDuration, compute_extra_duration};
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::utils::time::format_hm;

/// Overtime of a stored day.
pub fn day_extra(day: &DayRecord, standard_minutes: u32) -> AppResult<ExtraDuration> {
    compute_extra_duration(
        day.entry,
        day.lunch_start,
        day.lunch_end,
        day.exit,
        standard_minutes,
    )
}

/// Sum of the overtime minutes of every day; incomplete days are skipped.
pub fn total_extra_minutes(records: &[DayRecord], standard_minutes: u32) -> AppResult<i64> {
    let mut total = 0;

    for day in records {
        total += day_extra(day, standard_minutes)?.minutes().unwrap_or(0);
    }

    Ok(total)
}

/// Month total formatted as "H:MM" ("0:00" when nothing applies).
pub fn aggregate_extra_duration(records: &[DayRecord], standard_minutes: u32) -> AppResult<String> {
    total_extra_minutes(records, standard_minutes).map(format_hm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculator::extra::DEFAULT_STANDARD_WORKDAY_MINUTES;
    use crate::models::time_of_day::TimeOfDay;
    use chrono::NaiveDate;

    fn day(d: u32, entry: Option<&str>, exit: Option<&str>) -> DayRecord {
        let mut r = DayRecord::empty(NaiveDate::from_ymd_opt(2024, 10, d).unwrap());
        r.entry = entry.map(|s| TimeOfDay::parse(s).unwrap());
        r.exit = exit.map(|s| TimeOfDay::parse(s).unwrap());
        r
    }

    #[test]
    fn empty_month_totals_zero() {
        assert_eq!(
            aggregate_extra_duration(&[], DEFAULT_STANDARD_WORKDAY_MINUTES).unwrap(),
            "0:00"
        );
    }

    #[test]
    fn incomplete_days_are_skipped() {
        let records = vec![
            day(1, Some("08:00"), Some("17:30")), // 1:30
            day(2, Some("09:00"), Some("17:45")), // 0:45
            day(3, Some("09:00"), None),          // N/A
        ];
        assert_eq!(
            aggregate_extra_duration(&records, DEFAULT_STANDARD_WORKDAY_MINUTES).unwrap(),
            "2:15"
        );
    }

    #[test]
    fn all_not_applicable_totals_zero() {
        let records = vec![day(1, None, None), day(2, None, Some("18:00"))];
        assert_eq!(
            total_extra_minutes(&records, DEFAULT_STANDARD_WORKDAY_MINUTES).unwrap(),
            0
        );
    }

    #[test]
    fn invalid_day_propagates() {
        let records = vec![day(1, Some("18:00"), Some("09:00"))];
        assert!(aggregate_extra_duration(&records, DEFAULT_STANDARD_WORKDAY_MINUTES).is_err());
    }
}
