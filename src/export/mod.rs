//! Report renderers: spreadsheet CSV, printable HTML and Word documents.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::dto::list::ReportData;

pub mod csv;
pub mod html;

/// Byte order mark prepended so spreadsheet and word processors pick UTF-8.
pub const UTF8_BOM: &str = "\u{feff}";

/// Placeholder shown in HTML reports for blank cells.
pub const EMPTY_CELL: &str = "\u{2014}";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma separated values for spreadsheets.
    Csv,
    /// Standalone HTML page meant for the browser's print dialog.
    Print,
    /// HTML saved with a `.doc` extension, opened by word processors.
    Word,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Print => "html",
            ExportFormat::Word => "doc",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Print => "print",
            ExportFormat::Word => "word",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = TypeConstraintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "csv" | "excel" => Ok(ExportFormat::Csv),
            "print" | "html" => Ok(ExportFormat::Print),
            "word" | "doc" => Ok(ExportFormat::Word),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// `{slug}_{YYYY-MM-DD}.{ext}`, e.g. `region_2024-05-01.csv`.
pub fn file_name(slug: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "{slug}_{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Renders `report` in `format`; `generated_at` feeds the HTML timestamp.
pub fn render(
    report: &ReportData,
    format: ExportFormat,
    generated_at: NaiveDateTime,
) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Csv => csv::render_csv(report),
        ExportFormat::Print => {
            html::render_html(report, html::HtmlFlavor::Print, generated_at).map(String::into_bytes)
        }
        ExportFormat::Word => {
            let body = html::render_html(report, html::HtmlFlavor::Word, generated_at)?;
            Ok(format!("{UTF8_BOM}{body}").into_bytes())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_carry_date_and_extension() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
        assert_eq!(file_name("region", date, ExportFormat::Csv), "region_2024-05-01.csv");
        assert_eq!(
            file_name("document_source", date, ExportFormat::Word),
            "document_source_2024-05-01.doc"
        );
    }

    #[test]
    fn formats_parse_from_cli_names() {
        assert_eq!("CSV".parse::<ExportFormat>(), Ok(ExportFormat::Csv));
        assert_eq!("print".parse::<ExportFormat>(), Ok(ExportFormat::Print));
        assert_eq!("word".parse::<ExportFormat>(), Ok(ExportFormat::Word));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
