// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::ReportPdf;
use crate::models::monthly_report::MonthlyReport;
use std::path::Path;

/// Write the report table as a PDF file.
pub fn export_pdf(report: &MonthlyReport, path: &Path) -> AppResult<()> {
    let headers = MonthlyReport::headers();
    let rows = report.rows();

    let mut pdf = ReportPdf::new();
    pdf.write_report(
        &report.title,
        &headers,
        &rows,
        &format!(
            "Total extra hours: {}   (standard workday {})",
            report.total_extra, report.standard_workday
        ),
    );

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
