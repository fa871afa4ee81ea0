use std::fs;
use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::dto::list::ReportData;
use crate::export::{self, ExportError, ExportFormat};
use crate::repository::{RecordReader, TableRecord};
use crate::services::ServiceResult;
use crate::services::list::load_filtered;

/// Where and how an export is written.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub export_dir: PathBuf,
    /// Prepended to every report title.
    pub title_prefix: String,
    /// Moment stamped into the report and its file name.
    pub generated_at: NaiveDateTime,
}

/// Report title for a table, e.g. "Region - Report".
pub fn report_title(prefix: &str, table_title: &str) -> String {
    format!("{prefix}{table_title} - Report")
}

/// Turns records into report rows using their tabular layout.
pub fn build_report<T: TableRecord>(records: &[T], title: String) -> ReportData {
    ReportData {
        title,
        headers: T::headers().into_iter().map(String::from).collect(),
        rows: records.iter().map(|record| record.cells()).collect(),
    }
}

/// Exports every record of `T` matching `search` and returns the written path.
pub fn export_table<T, R>(
    repo: &R,
    format: ExportFormat,
    search: Option<&str>,
    options: &ExportOptions,
) -> ServiceResult<PathBuf>
where
    T: TableRecord,
    R: RecordReader + ?Sized,
{
    let records = load_filtered::<T, R>(repo, search)?;
    let report = build_report(
        &records,
        report_title(&options.title_prefix, T::TABLE.title()),
    );

    let bytes = export::render(&report, format, options.generated_at).map_err(|err| {
        log::error!("Failed to render {} export: {err}", T::TABLE);
        err
    })?;

    let path = options.export_dir.join(export::file_name(
        T::TABLE.slug(),
        options.generated_at.date(),
        format,
    ));
    fs::create_dir_all(&options.export_dir)
        .and_then(|()| fs::write(&path, bytes))
        .map_err(|err| {
            log::error!("Failed to write export {}: {err}", path.display());
            ExportError::from(err)
        })?;

    log::info!(
        "Exported {} {} record(s) to {}",
        records.len(),
        T::TABLE,
        path.display()
    );
    Ok(path)
}
