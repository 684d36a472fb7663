// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;

pub use model::{DurationExport, ReportExport, ReportRow, Selection};

use crate::core::stats::Summary;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Flatten the report rows the CSV exporter writes.
pub fn report_rows(selection: &Selection, summary: &Summary) -> Vec<ReportRow> {
    model::summary_to_rows(selection, summary)
}

/// Write `summary` to `path` in the chosen format.
pub fn export_summary(
    selection: &Selection,
    summary: &Summary,
    path: &Path,
    format: ExportFormat,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;
    fs_utils::ensure_parent(path)?;

    tracing::debug!(format = format.as_str(), path = %path.display(), "exporting report");

    match format {
        ExportFormat::Json => json_csv::export_json(&ReportExport::new(selection, summary), path),
        ExportFormat::Csv => json_csv::export_csv(&report_rows(selection, summary), path),
    }
}
