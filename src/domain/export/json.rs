use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use super::{ExportError, data_url, dated_filename};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonExport {
    pub filename: String,
    pub content: String,
    pub size: usize,
    pub download_url: String,
    pub data_type: &'static str,
    /// Array length, object key count, or 1 for a scalar.
    pub item_count: usize,
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn export_json(
    data: &Value,
    stem: &str,
    pretty: bool,
    today: NaiveDate,
) -> Result<JsonExport, ExportError> {
    if data.is_null() {
        return Err(ExportError::EmptyData);
    }

    let content = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };

    let item_count = match data {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        _ => 1,
    };

    Ok(JsonExport {
        filename: dated_filename(stem, today, "json"),
        size: content.len(),
        download_url: data_url("application/json", &content),
        content,
        data_type: type_name(data),
        item_count,
    })
}
