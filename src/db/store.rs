//! Month blobs: one JSON array of day records per month key.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::month_key::MonthKey;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use std::collections::HashSet;

/// Records stored for `month`, or `None` if the month was never saved.
pub fn load_month(pool: &DbPool, month: &MonthKey) -> AppResult<Option<Vec<DayRecord>>> {
    let payload: Option<String> = pool
        .conn
        .query_row(
            "SELECT payload FROM time_records WHERE month_key = ?1",
            [month.storage_key()],
            |row| row.get(0),
        )
        .optional()?;

    match payload {
        Some(json) => {
            let days: Vec<DayRecord> = serde_json::from_str(&json)?;
            check_dates(month, &days)?;
            Ok(Some(days))
        }
        None => Ok(None),
    }
}

/// Every record must belong to `month` and no date may repeat.
fn check_dates(month: &MonthKey, days: &[DayRecord]) -> AppResult<()> {
    let mut seen = HashSet::new();
    for day in days {
        if !month.contains(day.date) {
            return Err(AppError::InvalidDate(format!(
                "{} is stored under {}",
                day.date_str(),
                month
            )));
        }
        if !seen.insert(day.date) {
            return Err(AppError::InvalidDate(format!(
                "{} is stored twice under {}",
                day.date_str(),
                month
            )));
        }
    }
    Ok(())
}

/// Replace the blob of `month` (last write wins).
pub fn save_month(pool: &DbPool, month: &MonthKey, records: &[DayRecord]) -> AppResult<()> {
    let json = serde_json::to_string(records)?;
    let now = Local::now().to_rfc3339();

    pool.conn.execute(
        "INSERT INTO time_records (month_key, payload, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(month_key) DO UPDATE SET payload = excluded.payload,
                                              updated_at = excluded.updated_at",
        params![month.storage_key(), json, now],
    )?;

    Ok(())
}

/// Every month that has a stored blob, oldest first.
pub fn stored_months(pool: &DbPool) -> AppResult<Vec<MonthKey>> {
    let mut stmt = pool.conn.prepare("SELECT month_key FROM time_records")?;
    let keys = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for k in keys {
        if let Some(m) = MonthKey::from_storage_key(&k?) {
            out.push(m);
        }
    }
    out.sort();
    Ok(out)
}
