//! Handlers for export endpoints.
//!
//! Exports are rendered in memory and returned inline together with a
//! `data:` URL; nothing is written to disk.

use chrono::Utc;
use validator::Validate;

use crate::api::dto::ApiResponse;
use crate::api::dto::export::{CsvExportRequest, JsonExportRequest, ReportRequest};
use crate::api::extract::ApiJson;
use crate::domain::export::{
    CsvExport, JsonExport, ReportExport, ReportFormat, export_csv, export_json, render_report,
};
use crate::error::AppError;

/// Renders an array of objects as CSV.
///
/// # Endpoint
///
/// `POST /api/export/csv`
///
/// # Request Body
///
/// ```json
/// {
///   "data": [{ "keyword": "shoes", "volume": 1200 }],
///   "filename": "keywords",
///   "headers": ["keyword", "volume"]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for empty data, non-object rows or an invalid
/// filename.
pub async fn csv_handler(
    ApiJson(payload): ApiJson<CsvExportRequest>,
) -> Result<ApiResponse<CsvExport>, AppError> {
    payload.validate()?;

    let export = export_csv(
        &payload.data,
        &payload.filename,
        payload.headers,
        Utc::now().date_naive(),
    )?;
    let message = format!("Generated CSV with {} rows", export.rows);

    Ok(ApiResponse::ok(export).with_message(message))
}

/// Serializes arbitrary JSON into a downloadable file.
///
/// # Endpoint
///
/// `POST /api/export/json`
pub async fn json_handler(
    ApiJson(payload): ApiJson<JsonExportRequest>,
) -> Result<ApiResponse<JsonExport>, AppError> {
    payload.validate()?;

    let export = export_json(
        &payload.data,
        &payload.filename,
        payload.pretty,
        Utc::now().date_naive(),
    )?;

    Ok(ApiResponse::ok(export).with_message("Generated JSON file"))
}

/// Renders a titled multi-section report as HTML or Markdown.
///
/// # Endpoint
///
/// `POST /api/export/report`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Keyword audit",
///   "format": "html",
///   "sections": [
///     { "name": "Top keywords", "data": [{ "keyword": "shoes", "count": 3 }] },
///     { "name": "Totals", "data": { "keywords": 42 } }
///   ]
/// }
/// ```
pub async fn report_handler(
    ApiJson(payload): ApiJson<ReportRequest>,
) -> Result<ApiResponse<ReportExport>, AppError> {
    payload.validate()?;

    let report = render_report(&payload.title, &payload.sections, payload.format, Utc::now())?;
    let kind = match payload.format {
        ReportFormat::Html => "HTML",
        ReportFormat::Markdown => "Markdown",
    };
    let message = format!(
        "Generated {kind} report with {} sections",
        report.sections_count
    );

    Ok(ApiResponse::ok(report).with_message(message))
}
