//! DTOs for export endpoints.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use super::not_blank;
use crate::domain::export::{ReportFormat, ReportSection};

/// Filename stems: letters, digits, `.`, `_` and `-`.
static FILENAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").unwrap());

fn default_filename() -> String {
    "export".to_owned()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
pub struct CsvExportRequest {
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub data: Vec<Value>,

    #[serde(default = "default_filename")]
    #[validate(length(min = 1, max = 100), regex(path = "*FILENAME_REGEX"))]
    pub filename: String,

    pub headers: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct JsonExportRequest {
    #[serde(default)]
    pub data: Value,

    #[serde(default = "default_filename")]
    #[validate(length(min = 1, max = 100), regex(path = "*FILENAME_REGEX"))]
    pub filename: String,

    #[serde(default = "default_true")]
    pub pretty: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReportRequest {
    #[serde(default)]
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 50))]
    pub sections: Vec<ReportSection>,

    #[serde(default)]
    pub format: ReportFormat,
}
