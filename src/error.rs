//! Application error type and its HTTP mapping.
//!
//! Every error leaves the API as the standard envelope with
//! `success: false`. Internal details are logged, never returned.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::api::dto::ApiResponse;
use crate::application::services::ConnectionTestError;
use crate::domain::ads::AdTemplateError;
use crate::domain::export::ExportError;
use crate::domain::providers::UnsupportedApi;
use crate::domain::urls::UrlToolError;

const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                INTERNAL_MESSAGE.to_owned()
            }
            AppError::Validation(message) | AppError::NotFound(message) => message,
        };

        (status, ApiResponse::<()>::failure(message)).into_response()
    }
}

/// Flattens validator output into `field: message` pairs joined by `; `.
fn summarize(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: invalid value ({})", e.code),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(summarize(&errors))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<AdTemplateError> for AppError {
    fn from(e: AdTemplateError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<UrlToolError> for AppError {
    fn from(e: UrlToolError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<UnsupportedApi> for AppError {
    fn from(e: UnsupportedApi) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// A failed connection test is reported to the caller, not logged as a
/// server fault.
impl From<ConnectionTestError> for AppError {
    fn from(e: ConnectionTestError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        if e.is_client_error() {
            AppError::Validation(e.to_string())
        } else {
            AppError::Internal(e.to_string())
        }
    }
}
