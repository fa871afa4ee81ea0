use chrono::NaiveDateTime;
use serde::Serialize;
use tera::{Context, Tera};

use crate::dto::list::ReportData;
use crate::export::{EMPTY_CELL, ExportError};

const REPORT_TEMPLATE_NAME: &str = "report.html";
const REPORT_TEMPLATE: &str = include_str!("../../templates/report.html");

/// Timestamp layout used in report headers, e.g. `05/01/2024, 02:30:00 PM`.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y, %I:%M:%S %p";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HtmlFlavor {
    Print,
    Word,
}

impl HtmlFlavor {
    fn stamp_label(self) -> &'static str {
        match self {
            HtmlFlavor::Print => "Printed on",
            HtmlFlavor::Word => "Exported on",
        }
    }
}

#[derive(Serialize)]
struct ReportContext<'a> {
    title: &'a str,
    headers: &'a [String],
    rows: Vec<Vec<&'a str>>,
    stamp_label: &'static str,
    generated_at: String,
    word: bool,
}

/// Renders the report as a standalone HTML page. Cell text is escaped and
/// blank cells show an em dash.
pub fn render_html(
    report: &ReportData,
    flavor: HtmlFlavor,
    generated_at: NaiveDateTime,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(REPORT_TEMPLATE_NAME, REPORT_TEMPLATE)?;

    let rows: Vec<Vec<&str>> = report
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if cell.trim().is_empty() {
                        EMPTY_CELL
                    } else {
                        cell.as_str()
                    }
                })
                .collect()
        })
        .collect();

    let context = ReportContext {
        title: &report.title,
        headers: &report.headers,
        rows,
        stamp_label: flavor.stamp_label(),
        generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
        word: flavor == HtmlFlavor::Word,
    };

    Ok(tera.render(REPORT_TEMPLATE_NAME, &Context::from_serialize(&context)?)?)
}
