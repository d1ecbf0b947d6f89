//! Handlers for third-party credential management.

use axum::extract::{Path, State};

use crate::api::dto::ApiResponse;
use crate::api::dto::api_config::{ConfigStatusResponse, SetKeysRequest, SetKeysResponse};
use crate::api::extract::ApiJson;
use crate::domain::providers::ExternalApi;
use crate::error::AppError;
use crate::infrastructure::credentials::CredentialKey;
use crate::state::AppState;

/// Reports which APIs have credentials.
///
/// # Endpoint
///
/// `GET /api/config/status`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "configured_apis": ["google_search"],
///     "missing_apis": ["google_search_cx", "twitter_bearer", "youtube_api", "knowledge_graph"],
///     "status": { "google_search": true, "google_search_cx": false, ... }
///   },
///   "message": "1/5 APIs configured"
/// }
/// ```
pub async fn config_status_handler(
    State(state): State<AppState>,
) -> ApiResponse<ConfigStatusResponse> {
    let configured = state.credentials.configured().await;
    let status = state.credentials.status().await;

    let (configured_apis, missing_apis): (Vec<_>, Vec<_>) = CredentialKey::ALL
        .into_iter()
        .partition(|key| configured.contains(key));

    let message = format!(
        "{}/{} APIs configured",
        configured_apis.len(),
        CredentialKey::ALL.len()
    );

    ApiResponse::ok(ConfigStatusResponse {
        configured_apis: configured_apis.into_iter().map(CredentialKey::api_name).collect(),
        missing_apis: missing_apis.into_iter().map(CredentialKey::api_name).collect(),
        status,
    })
    .with_message(message)
}

/// Stores any subset of credentials for the lifetime of the process.
///
/// # Endpoint
///
/// `POST /api/config/keys`
///
/// Blank values are ignored; others are trimmed before storing.
pub async fn set_keys_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SetKeysRequest>,
) -> Result<ApiResponse<SetKeysResponse>, AppError> {
    let updated_keys = state.credentials.set_many(payload.into_pairs()).await;
    let configured_apis = state
        .credentials
        .configured()
        .await
        .into_iter()
        .map(CredentialKey::as_str)
        .collect();

    tracing::info!(updated_keys, "API credentials updated");

    Ok(ApiResponse::ok(SetKeysResponse {
        updated_keys,
        configured_apis,
    })
    .with_message(format!("Updated {updated_keys} API keys")))
}

/// Forgets one credential.
///
/// # Endpoint
///
/// `DELETE /api/config/keys/{key}`
///
/// # Errors
///
/// Returns 404 Not Found if the key name is unknown or the key is not set.
pub async fn delete_key_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<ApiResponse<()>, AppError> {
    let not_found = || AppError::not_found(format!("No API key configured for {key}"));

    let parsed: CredentialKey = key.parse().map_err(|_| not_found())?;
    if !state.credentials.remove(parsed).await {
        return Err(not_found());
    }

    tracing::info!(key = %parsed, "API credential removed");
    Ok(ApiResponse::<()>::message(format!("Removed API key {parsed}")))
}

/// Makes one real request with the stored credentials for `api`.
///
/// # Endpoint
///
/// `POST /api/config/test/{api}` where `api` is `google_search`, `youtube`
/// or `twitter`
///
/// # Errors
///
/// Returns 400 Bad Request if the API is unknown, its credentials are not
/// stored, or the provider rejects the request.
pub async fn test_connection_handler(
    State(state): State<AppState>,
    Path(api): Path<String>,
) -> Result<ApiResponse<()>, AppError> {
    let api: ExternalApi = api.parse()?;
    state.connection_service.test(api).await?;

    Ok(ApiResponse::<()>::message(format!(
        "{api} API connection test succeeded"
    )))
}
