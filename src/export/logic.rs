// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::range::parse_range;
use crate::ui::messages::warning;

use chrono::NaiveDate;
use std::io;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export time entries.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or an expression like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let expanded = crate::utils::path::expand_tilde(file);
        let path = expanded.as_path();

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let entries = crate::db::queries::load_entries_between(pool, date_bounds)?;

        if entries.is_empty() {
            warning("⚠️  No entries found for selected range.");
            return Ok(());
        }

        let flat: Vec<EntryExport> = entries.iter().map(EntryExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&flat, path)?,
            ExportFormat::Json => export_json(&flat, path)?,
        }

        let _ = crate::db::log::ttlog(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} entries", flat.len()),
        );

        Ok(())
    }
}
