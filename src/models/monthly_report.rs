use super::{day_record::DayRecord, month_key::MonthKey, time_field::TimeField};
use crate::core::calculator::{ExtraDuration, aggregate_extra_duration, day_extra};
use crate::errors::AppResult;
use crate::utils::time::format_hm;
use serde::Serialize;

/// One line of the report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub date: String,
    pub entry: String,
    pub lunch_start: String,
    pub lunch_end: String,
    pub exit: String,
    pub extra: String,
}

impl ReportRow {
    fn build(day: &DayRecord, extra: ExtraDuration) -> Self {
        Self {
            date: day.date_str(),
            entry: day.time_str(TimeField::Entry),
            lunch_start: day.time_str(TimeField::LunchStart),
            lunch_end: day.time_str(TimeField::LunchEnd),
            exit: day.time_str(TimeField::Exit),
            extra: extra.to_string(),
        }
    }

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.entry.clone(),
            self.lunch_start.clone(),
            self.lunch_end.clone(),
            self.exit.clone(),
            self.extra.clone(),
        ]
    }
}

/// Days of a month with their overtime and the month total.
/// Built on demand, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    pub month: String,
    #[serde(skip)]
    pub title: String,
    pub standard_workday: String,
    pub days: Vec<ReportRow>,
    pub total_extra: String,
}

impl MonthlyReport {
    pub fn build(
        month: MonthKey,
        title: &str,
        records: &[DayRecord],
        standard_minutes: u32,
    ) -> AppResult<Self> {
        let days = records
            .iter()
            .map(|day| day_extra(day, standard_minutes).map(|extra| ReportRow::build(day, extra)))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            month: month.to_string(),
            title: format!("{} - {}", title, month.label()),
            standard_workday: format_hm(standard_minutes as i64),
            days,
            total_extra: aggregate_extra_duration(records, standard_minutes)?,
        })
    }

    pub fn headers() -> Vec<&'static str> {
        vec![
            "Date",
            "Entry",
            "Lunch start",
            "Lunch end",
            "Exit",
            "Extra",
        ]
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.days.iter().map(ReportRow::cells).collect()
    }
}
