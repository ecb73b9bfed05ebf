//! Time utilities: parsing HH:MM from the command line, formatting minute counts.

use crate::errors::AppResult;
use crate::models::time_of_day::TimeOfDay;

pub fn minutes_between(start: TimeOfDay, end: TimeOfDay) -> i64 {
    end.minutes_since_midnight() - start.minutes_since_midnight()
}

/// Format a minute count as "H:MM": hours unpadded, minutes always two digits.
pub fn format_hm(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{}:{:02}", sign, m / 60, m % 60)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<TimeOfDay>> {
    input.map(|s| TimeOfDay::parse(s)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_minutes_only() {
        assert_eq!(format_hm(125), "2:05");
        assert_eq!(format_hm(0), "0:00");
        assert_eq!(format_hm(45), "0:45");
        assert_eq!(format_hm(61 * 60), "61:00");
    }

    #[test]
    fn missing_input_is_not_an_error() {
        assert_eq!(parse_optional_time(None).unwrap(), None);
        let t = parse_optional_time(Some(&"18:30".to_string())).unwrap();
        assert_eq!(t, Some(TimeOfDay::new(18, 30).unwrap()));
    }
}
