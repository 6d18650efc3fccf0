// src/export/logic.rs

use crate::core::admin::AdminLogic;
use crate::core::range::DateRange;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::JornadaExport;
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, is_absolute};

/// High-level export of the admin listing.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the records of `range` (optionally for one colaborador).
    ///
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    ///
    /// Returns the number of exported rows.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        range: &DateRange,
        colaborador_id: Option<i64>,
        force: bool,
    ) -> AppResult<usize> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let rows: Vec<JornadaExport> = AdminLogic::query(&pool.conn, range, colaborador_id)?
            .iter()
            .map(JornadaExport::from)
            .collect();

        if rows.is_empty() {
            warning(format!("No records found for {}.", range.describe()));
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(rows.len())
    }
}
