//! Export rendering: CSV, JSON and HTML/Markdown reports.
//!
//! Every export is returned inline together with a base64 `data:` URI the
//! browser can download directly; nothing is written to disk.

pub mod csv;
pub mod json;
pub mod report;

pub use csv::{CsvExport, export_csv};
pub use json::{JsonExport, export_json};
pub use report::{ReportExport, ReportFormat, ReportSection, render_report};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No data to export")]
    EmptyData,

    #[error("Data must be an array of objects")]
    NotAnObjectArray,

    #[error("Report title is required")]
    MissingTitle,

    #[error("Report must contain at least one section")]
    NoSections,

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Output is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    /// `true` when the caller supplied unusable input rather than the
    /// renderer failing.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExportError::EmptyData
                | ExportError::NotAnObjectArray
                | ExportError::MissingTitle
                | ExportError::NoSections
        )
    }
}

/// Builds a `data:` URI with base64 payload.
pub fn data_url(mime: &str, content: &str) -> String {
    format!(
        "data:{mime};charset=utf-8;base64,{}",
        STANDARD.encode(content.as_bytes())
    )
}

/// `{stem}_{YYYY-MM-DD}.{extension}`
pub fn dated_filename(stem: &str, date: NaiveDate, extension: &str) -> String {
    format!("{stem}_{}.{extension}", date.format("%Y-%m-%d"))
}

/// Text shown for a JSON value inside a table cell.
///
/// Strings are unquoted, `null` is empty and nested values stay JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Column names taken from the first row, in insertion order.
fn first_row_keys(rows: &[Value]) -> Option<Vec<String>> {
    rows.first()?
        .as_object()
        .map(|object| object.keys().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_url_is_base64() {
        assert_eq!(
            data_url("text/csv", "a,b\n"),
            "data:text/csv;charset=utf-8;base64,YSxiCg=="
        );
    }

    #[test]
    fn test_dated_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(dated_filename("leads", date, "csv"), "leads_2024-03-07.csv");
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&json!("x")), "x");
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!(0)), "0");
        assert_eq!(cell_text(&json!(false)), "false");
        assert_eq!(cell_text(&json!({"a": [1]})), r#"{"a":[1]}"#);
    }

    #[test]
    fn test_first_row_keys_preserve_order() {
        let rows = vec![json!({"zeta": 1, "alpha": 2})];
        assert_eq!(first_row_keys(&rows), Some(vec!["zeta".into(), "alpha".into()]));
        assert_eq!(first_row_keys(&[json!(1)]), None);
    }
}
