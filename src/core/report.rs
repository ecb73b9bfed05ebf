use crate::config::Config;
use crate::core::session::MonthSession;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::{
    ReportFormat, ensure_writable, export_pdf, notify_export_success, render_csv, render_html,
    render_json,
};
use crate::models::month_key::MonthKey;
use crate::models::monthly_report::MonthlyReport;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub struct ReportLogic;

impl ReportLogic {
    /// Build the report of `month` and write it.
    ///
    /// Without `file` the textual formats go to stdout; PDF needs a file.
    pub fn generate(
        pool: &DbPool,
        cfg: &Config,
        month: MonthKey,
        format: ReportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        if file.is_none() && !format.is_textual() {
            return Err(AppError::Export(
                "a PDF report needs --file <path>".into(),
            ));
        }

        let session = MonthSession::open(pool, month, cfg)?;
        let report = session.report(&cfg.report_title)?;

        match file {
            Some(f) => {
                let path = Path::new(f);
                ensure_writable(path, force)?;
                Self::write_file(&report, format, path)?;
                ttlog_quiet(
                    &pool.conn,
                    "report",
                    &month.to_string(),
                    &format!("{} report written to {}", format.as_str(), path.display()),
                );
            }
            None => {
                let text = Self::render_text(&report, format)?;
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())?;
                out.flush()?;
            }
        }

        Ok(())
    }

    fn render_text(report: &MonthlyReport, format: ReportFormat) -> AppResult<String> {
        match format {
            ReportFormat::Html => Ok(render_html(report)),
            ReportFormat::Json => render_json(report),
            ReportFormat::Csv => render_csv(report),
            ReportFormat::Pdf => Err(AppError::Export("PDF is not a text format".into())),
        }
    }

    fn write_file(report: &MonthlyReport, format: ReportFormat, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if format == ReportFormat::Pdf {
            return export_pdf(report, path);
        }

        fs::write(path, Self::render_text(report, format)?)?;
        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(())
    }
}
