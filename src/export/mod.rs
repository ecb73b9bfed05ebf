// src/export/mod.rs

mod fs_utils;
mod html;
mod json_csv;
mod pdf;
mod pdf_export;

pub use fs_utils::ensure_writable;
pub use html::render_html;
pub use json_csv::{render_csv, render_json};
pub use pdf_export::export_pdf;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every written report.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} report written: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Html,
    Pdf,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Pdf => "pdf",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// PDF is binary and can only go to a file.
    pub fn is_textual(&self) -> bool {
        !matches!(self, ReportFormat::Pdf)
    }
}
