// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::models::monthly_report::MonthlyReport;

/// Pretty-printed JSON report.
pub fn render_json(report: &MonthlyReport) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// CSV with one row per day (header from the row fields, via serde).
pub fn render_csv(report: &MonthlyReport) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for row in &report.days {
        wtr.serialize(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| crate::errors::AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|e| crate::errors::AppError::Export(format!("CSV encoding error: {e}")))
}
