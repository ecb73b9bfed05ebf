use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut cur = NaiveDate::from_ymd_opt(year, month, 1);

    while let Some(d) = cur {
        if d.month() != month {
            break;
        }
        out.push(d);
        cur = d.succ_opt();
    }

    out
}

/// Monday to Friday.
pub fn is_weekday(d: NaiveDate) -> bool {
    !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn weekdays_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    all_days_of_month(year, month)
        .into_iter()
        .filter(|d| is_weekday(*d))
        .collect()
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_leap_year_has_29_days() {
        assert_eq!(all_days_of_month(2024, 2).len(), 29);
        assert_eq!(all_days_of_month(2025, 2).len(), 28);
    }

    #[test]
    fn weekdays_skip_saturday_and_sunday() {
        // October 2024 starts on a Tuesday: 23 weekdays
        let days = weekdays_of_month(2024, 10);
        assert_eq!(days.len(), 23);
        assert!(days.iter().all(|d| is_weekday(*d)));
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
    }

    #[test]
    fn invalid_month_yields_no_days() {
        assert!(all_days_of_month(2024, 13).is_empty());
    }
}
