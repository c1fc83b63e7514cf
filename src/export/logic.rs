// src/export/logic.rs

use crate::core::logic::GridView;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::GridExport;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `view` to `file` in `format`.
    ///
    /// - `file` must be an absolute path
    /// - an existing file is only replaced with `force` or after confirmation
    pub fn export(
        view: &GridView,
        reference: NaiveDate,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<GridExport> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let doc = GridExport::from_view(view, reference);

        match format {
            ExportFormat::Csv => export_csv(&doc.cells, path)?,
            ExportFormat::Json => export_json(&doc, path)?,
        }

        Ok(doc)
    }
}
