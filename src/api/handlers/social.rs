//! Handlers for social content tools.

use validator::Validate;

use crate::api::dto::ApiResponse;
use crate::api::dto::social::{ContentOptimizerRequest, ContentOptimizerResponse};
use crate::api::extract::ApiJson;
use crate::domain::social::optimize;
use crate::error::AppError;
use crate::infrastructure::synthetic;

/// Scores a post against its platform and suggests fixes.
///
/// # Endpoint
///
/// `POST /api/social/content-optimizer`
///
/// # Request Body
///
/// ```json
/// { "content": "New arrivals #shoes", "platform": "twitter", "target_audience": "runners" }
/// ```
///
/// `platform` is one of `twitter`, `weibo`, `linkedin` or `instagram`.
/// `engagement_prediction` in the response is random.
///
/// # Errors
///
/// Returns 400 Bad Request if the content is blank or the platform unknown.
pub async fn content_optimizer_handler(
    ApiJson(payload): ApiJson<ContentOptimizerRequest>,
) -> Result<ApiResponse<ContentOptimizerResponse>, AppError> {
    payload.validate()?;

    let target_audience = payload
        .target_audience
        .map(|audience| audience.trim().to_owned())
        .filter(|audience| !audience.is_empty());
    let report = optimize(&payload.content, payload.platform, target_audience);

    let message = format!(
        "Optimized content for {}, score {}",
        report.platform, report.optimization_score
    );
    Ok(ApiResponse::ok(ContentOptimizerResponse {
        report,
        engagement_prediction: synthetic::engagement_prediction(),
    })
    .with_message(message))
}
