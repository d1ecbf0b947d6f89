use chrono::NaiveDate;
use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use serde_json::Value;

use super::{ExportError, cell_text, data_url, dated_filename, first_row_keys};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
    /// Size of `content` in bytes.
    pub size: usize,
    pub rows: usize,
    pub columns: usize,
    pub download_url: String,
    pub headers: Vec<String>,
}

/// Renders `rows` (JSON objects) as CSV.
///
/// Columns come from `headers` or, when absent, from the keys of the first
/// row. Missing fields become empty cells.
pub fn export_csv(
    rows: &[Value],
    stem: &str,
    headers: Option<Vec<String>>,
    today: NaiveDate,
) -> Result<CsvExport, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::EmptyData);
    }
    if !rows.iter().all(Value::is_object) {
        return Err(ExportError::NotAnObjectArray);
    }

    let headers = match headers {
        Some(headers) if !headers.is_empty() => headers,
        _ => first_row_keys(rows).ok_or(ExportError::NotAnObjectArray)?,
    };

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(&headers)?;
    for row in rows {
        writer.write_record(
            headers
                .iter()
                .map(|h| row.get(h).map(cell_text).unwrap_or_default()),
        )?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ::csv::Error::from(e.into_error()))?;
    let content = String::from_utf8(bytes)?;

    Ok(CsvExport {
        filename: dated_filename(stem, today, "csv"),
        size: content.len(),
        rows: rows.len(),
        columns: headers.len(),
        download_url: data_url("text/csv", &content),
        content,
        headers,
    })
}
