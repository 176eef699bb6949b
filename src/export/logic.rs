// src/export/logic.rs

use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::reports::load_report;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::rows_for_view;
use std::io;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one report.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: absolute path of the output file
    /// - `report_id`: the report to export
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        report_id: i64,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let view = load_report(&pool.conn, report_id)?;

        match format {
            ExportFormat::Json => export_json(&view, path)?,
            ExportFormat::Csv => export_csv(&rows_for_view(&view), path)?,
        }

        let _ = audit(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("report {report_id} exported as {}", format.as_str()),
        );

        Ok(())
    }
}
