use ::csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::dto::list::ReportData;
use crate::export::{ExportError, UTF8_BOM};

/// Header row plus one row per record, every field quoted, rows joined by
/// `\n` and prefixed with a BOM.
pub fn render_csv(report: &ReportData) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::from(UTF8_BOM.as_bytes()));

    writer.write_record(&report.headers)?;
    for row in &report.rows {
        writer.write_record(row)?;
    }

    let mut bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    // Rows are joined, not terminated.
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(bytes)
}
