//! Handlers for keyword expansion and ad copy generation.

use validator::Validate;

use crate::api::dto::ApiResponse;
use crate::api::dto::sem::{AdRequest, BatchAdItem, BatchAdRequest, KeywordsRequest, MAX_KEYWORDS};
use crate::api::extract::ApiJson;
use crate::domain::ads::{AdVariant, generate_variants, render};
use crate::domain::keywords::{COMMON_MODIFIERS, KeywordCandidate, generate_candidates};
use crate::error::AppError;

/// Expands seed keywords with modifiers.
///
/// # Endpoint
///
/// `POST /api/sem/keywords`
///
/// # Request Body
///
/// ```json
/// {
///   "seeds": ["running shoes"],
///   "modifiers": ["cheap"],
///   "include_common_modifiers": true
/// }
/// ```
///
/// Candidates are sorted by length, then alphabetically, and capped at 500.
pub async fn keywords_handler(
    ApiJson(payload): ApiJson<KeywordsRequest>,
) -> Result<ApiResponse<Vec<KeywordCandidate>>, AppError> {
    payload.validate()?;

    let mut modifiers = payload.modifiers;
    if payload.include_common_modifiers {
        modifiers.extend(COMMON_MODIFIERS.iter().map(|m| (*m).to_owned()));
    }

    let mut candidates = generate_candidates(&payload.seeds, &modifiers);
    candidates.truncate(MAX_KEYWORDS);

    let message = format!("Generated {} keywords", candidates.len());
    Ok(ApiResponse::ok(candidates).with_message(message))
}

/// Generates headline variants for one product.
///
/// # Endpoint
///
/// `POST /api/sem/ads`
///
/// # Request Body
///
/// ```json
/// { "product_name": "Widgets", "template": "Best {product} deal", "max_length": 30 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the template lacks `{product}`, the product
/// is blank, or `max_length` is below 3.
pub async fn ads_handler(
    ApiJson(payload): ApiJson<AdRequest>,
) -> Result<ApiResponse<Vec<AdVariant>>, AppError> {
    payload.validate()?;

    let variants = generate_variants(
        &payload.template,
        payload.product_name.trim(),
        payload.max_length,
    )?;

    let message = format!("Generated {} ad variants", variants.len());
    Ok(ApiResponse::ok(variants).with_message(message))
}

/// Renders one headline per product from a shared template.
///
/// # Endpoint
///
/// `POST /api/sem/ads/batch`
///
/// Blank product names are skipped.
pub async fn batch_ads_handler(
    ApiJson(payload): ApiJson<BatchAdRequest>,
) -> Result<ApiResponse<Vec<BatchAdItem>>, AppError> {
    payload.validate()?;

    let mut items = Vec::with_capacity(payload.products.len());
    for product in payload.products.iter().map(|p| p.trim()).filter(|p| !p.is_empty()) {
        let mut variant = render(&payload.template, product, payload.max_length)?;
        variant.description = Some(format!("Batch-generated copy for {product}"));
        items.push(BatchAdItem {
            product: product.to_owned(),
            variant,
        });
    }

    let message = format!("Generated ad copy for {} products", items.len());
    Ok(ApiResponse::ok(items).with_message(message))
}
