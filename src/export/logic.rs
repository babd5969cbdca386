// src/export/logic.rs

use crate::config::Config;
use crate::core::logic::Core;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::load_entries;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ChartExport, DayExport, EntryExport, ExportRow};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportKind};
use crate::ui::messages::warning;
use crate::utils::range::{in_bounds, parse_optional_range};
use chrono::NaiveDate;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one projection of the ledger.
    ///
    /// - `format`: csv | json | xlsx
    /// - `kind`: days | entries | chart
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `A:B`
    ///
    /// The chart series is computed over the whole ledger and filtered
    /// afterwards, so running totals keep counting days before the range.
    /// Returns the number of rows written.
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        today: NaiveDate,
        format: ExportFormat,
        kind: ExportKind,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds = parse_optional_range(range)?;

        let entries = load_entries(pool, &cfg.storage_key)?;
        let view = Core::build_view(&entries, today);

        let written = match kind {
            ExportKind::Entries => {
                let mut rows: Vec<EntryExport> = entries
                    .iter()
                    .filter(|e| in_bounds(e.date, bounds))
                    .map(EntryExport::from)
                    .collect();
                rows.sort_by(|a, b| b.date.cmp(&a.date));
                write_rows(&rows, format, path, force, "entries")?
            }
            ExportKind::Days => {
                let rows: Vec<DayExport> = view
                    .summaries
                    .descending
                    .iter()
                    .filter(|d| in_bounds(d.date, bounds))
                    .map(DayExport::from)
                    .collect();
                write_rows(&rows, format, path, force, "days")?
            }
            ExportKind::Chart => {
                let rows: Vec<ChartExport> = view
                    .chart
                    .iter()
                    .filter(|p| in_bounds(p.date, bounds))
                    .map(ChartExport::from)
                    .collect();
                write_rows(&rows, format, path, force, "chart")?
            }
        };

        if written > 0 {
            ttlog_quiet(
                &pool.conn,
                "export",
                file,
                &format!(
                    "{} {} rows as {}",
                    written,
                    kind.as_str(),
                    format.as_str()
                ),
            );
        }

        Ok(written)
    }
}

fn write_rows<T: ExportRow>(
    rows: &[T],
    format: ExportFormat,
    path: &Path,
    force: bool,
    sheet: &str,
) -> AppResult<usize> {
    if rows.is_empty() {
        warning("No data found for selected range.");
        return Ok(0);
    }

    ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
        ExportFormat::Xlsx => export_xlsx(rows, path, sheet)?,
    }

    Ok(rows.len())
}
