use chrono::{NaiveDate, NaiveDateTime};
use doctrack::domain::office::Office;
use doctrack::domain::types::{OfficeId, OfficeName};
use doctrack::export::{ExportFormat, render};
use doctrack::services::export::{build_report, report_title};

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|date| date.and_hms_opt(14, 5, 9))
        .expect("valid timestamp")
}

fn office(id: i32, name: &str, short_name: &str) -> Office {
    Office {
        id: OfficeId::new(id).expect("valid id"),
        office: OfficeName::new(name).expect("valid name"),
        region: "NCR".into(),
        short_name: short_name.into(),
        head_office: String::new(),
    }
}

fn rendered(records: &[Office], format: ExportFormat) -> String {
    let report = build_report(records, report_title("", "Office"));
    let bytes = render(&report, format, generated_at()).expect("rendered");
    String::from_utf8(bytes).expect("utf-8 output")
}

#[test]
fn csv_quotes_every_field_and_doubles_quotes() {
    let text = rendered(&[office(1, "The \"Main\" Office", "MO")], ExportFormat::Csv);
    let text = text.strip_prefix('\u{feff}').expect("byte order mark");
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(
        lines,
        vec![
            "\"ID\",\"Office\",\"Region\",\"Short Name\",\"Head Office\"",
            "\"00001\",\"The \"\"Main\"\" Office\",\"NCR\",\"MO\",\"\"",
        ]
    );
}

#[test]
fn print_report_escapes_cells_and_marks_blanks() {
    let text = rendered(&[office(2, "R&D <Lab>", "")], ExportFormat::Print);
    assert!(!text.starts_with('\u{feff}'));
    assert!(text.contains("Office - Report"));
    assert!(text.contains("Printed on: 05/01/2024, 02:05:09 PM"));
    assert!(text.contains("R&amp;D &lt;Lab&gt;"));
    assert!(text.contains("\u{2014}"));
    assert!(!text.contains("charset=\"utf-8\"") && !text.contains("charset=utf-8"));
}

#[test]
fn word_report_is_marked_utf8() {
    let text = rendered(&[], ExportFormat::Word);
    assert!(text.starts_with('\u{feff}'));
    assert!(text.contains("<meta charset=\"utf-8\">"));
    assert!(text.contains("Exported on: 05/01/2024, 02:05:09 PM"));
    assert!(text.contains("No documents found"));
}
