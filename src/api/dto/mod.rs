//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Responses are wrapped in [`ApiResponse`].

pub mod api_config;
pub mod export;
pub mod health;
pub mod response;
pub mod sem;
pub mod seo;
pub mod social;
pub mod text;
pub mod url;

pub use response::ApiResponse;

use std::borrow::Cow;

use validator::ValidationError;

/// Rejects empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")));
    }
    Ok(())
}

/// Requires at least one non-blank entry.
pub fn any_not_blank(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().all(|v| v.trim().is_empty()) {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("must contain at least one non-blank value")));
    }
    Ok(())
}
