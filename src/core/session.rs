//! Editing session over one month of day records.

use crate::config::Config;
use crate::core::calculator::day_extra;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::{load_month, save_month};
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::month_key::{Direction, MonthKey};
use crate::models::monthly_report::MonthlyReport;
use crate::models::time_field::TimeField;
use crate::models::time_of_day::TimeOfDay;
use crate::utils::date;
use chrono::NaiveDate;

/// Which time slot, if any, is waiting for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Idle,
    PickingTime { date: NaiveDate, field: TimeField },
}

pub struct MonthSession {
    month: MonthKey,
    days: Vec<DayRecord>,
    picker: PickerState,
    standard_minutes: u32,
    skip_weekends: bool,
}

/// Empty records for every day of `month` that is shown by default.
pub fn default_days(month: &MonthKey, skip_weekends: bool) -> Vec<DayRecord> {
    let dates = if skip_weekends {
        date::weekdays_of_month(month.year(), month.month())
    } else {
        month.days()
    };
    dates.into_iter().map(DayRecord::empty).collect()
}

impl MonthSession {
    /// Load `month` from the store; a month never saved starts from the default days.
    pub fn open(pool: &DbPool, month: MonthKey, cfg: &Config) -> AppResult<Self> {
        let mut session = Self {
            month,
            days: Vec::new(),
            picker: PickerState::Idle,
            standard_minutes: cfg.standard_workday_minutes,
            skip_weekends: cfg.skip_weekends,
        };
        session.load(pool)?;
        Ok(session)
    }

    fn load(&mut self, pool: &DbPool) -> AppResult<()> {
        self.days = match load_month(pool, &self.month)? {
            Some(days) => days,
            None => default_days(&self.month, self.skip_weekends),
        };
        Ok(())
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    pub fn picker(&self) -> PickerState {
        self.picker
    }

    pub fn standard_minutes(&self) -> u32 {
        self.standard_minutes
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.iter().find(|d| d.date == date)
    }

    /// Select the slot to edit. Selecting again replaces the previous target.
    pub fn open_picker(&mut self, date: NaiveDate, field: TimeField) -> AppResult<()> {
        if !self.month.contains(date) {
            return Err(AppError::InvalidDate(format!(
                "{} is not in {}",
                date, self.month
            )));
        }
        self.picker = PickerState::PickingTime { date, field };
        Ok(())
    }

    /// Leave the picker without changing anything.
    pub fn dismiss(&mut self) {
        self.picker = PickerState::Idle;
    }

    /// Store `value` (or clear the slot with `None`) in the selected slot,
    /// then write the whole month through to the store.
    ///
    /// The change is refused when it leaves the day with a negative
    /// interval; in every case the picker returns to `Idle`.
    pub fn confirm(&mut self, pool: &DbPool, value: Option<TimeOfDay>) -> AppResult<()> {
        let PickerState::PickingTime { date, field } = self.picker else {
            return Err(AppError::PickerIdle);
        };
        self.picker = PickerState::Idle;

        let mut updated = self
            .day(date)
            .cloned()
            .unwrap_or_else(|| DayRecord::empty(date));
        updated.set(field, value);
        day_extra(&updated, self.standard_minutes)?;

        let mut days = self.days.clone();
        match days.iter().position(|d| d.date == date) {
            Some(i) => days[i] = updated,
            None => {
                let at = days.partition_point(|d| d.date < date);
                days.insert(at, updated);
            }
        }

        // the session only takes the edit once it is stored
        save_month(pool, &self.month, &days)?;
        self.days = days;

        let (operation, message) = match value {
            Some(t) => ("set", format!("{} = {}", field.key(), t)),
            None => ("clear", format!("{} cleared", field.key())),
        };
        ttlog_quiet(&pool.conn, operation, &date.to_string(), &message);

        Ok(())
    }

    /// Move to the previous or next month, dropping any pending selection.
    pub fn change_month(&mut self, pool: &DbPool, direction: Direction) -> AppResult<()> {
        self.month = self.month.step(direction);
        self.picker = PickerState::Idle;
        self.load(pool)
    }

    pub fn report(&self, title: &str) -> AppResult<MonthlyReport> {
        MonthlyReport::build(self.month, title, &self.days, self.standard_minutes)
    }
}
