//! Handlers for text analysis endpoints.

use validator::Validate;

use crate::api::dto::ApiResponse;
use crate::api::dto::text::{
    ExtractRequest, ExtractResponse, TextRequest, WordFrequencyRequest, WordFrequencyResponse,
};
use crate::api::extract::ApiJson;
use crate::domain::extract::{aggregate, extract_all};
use crate::domain::text::{
    SentimentReport, TextStats, analyze_sentiment, frequency, text_stats, tokenize,
    word_statistics,
};
use crate::error::AppError;

/// Counts word frequencies in a text.
///
/// # Endpoint
///
/// `POST /api/text/word-frequency`
///
/// # Request Body
///
/// ```json
/// { "text": "buy shoes, buy boots", "min_length": 2, "top_words": 20 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the text is blank, a limit is out of range,
/// or no token reaches `min_length`.
pub async fn word_frequency_handler(
    ApiJson(payload): ApiJson<WordFrequencyRequest>,
) -> Result<ApiResponse<WordFrequencyResponse>, AppError> {
    payload.validate()?;

    let tokens = tokenize(&payload.text, payload.min_length);
    if tokens.is_empty() {
        return Err(AppError::bad_request(format!(
            "No words of at least {} characters found in text",
            payload.min_length
        )));
    }

    let words = frequency(&tokens, payload.top_words);
    let statistics = word_statistics(&tokens, &payload.text);
    let message = format!(
        "Found {} distinct words out of {} total",
        statistics.unique_words, statistics.total_words
    );

    Ok(ApiResponse::ok(WordFrequencyResponse { words, statistics }).with_message(message))
}

/// Extracts URLs, emails, hashtags, mentions and numbers.
///
/// # Endpoint
///
/// `POST /api/text/extract`
///
/// With `"type": "all"` (the default) the response carries the raw match
/// lists of every kind plus a per-kind summary. Any other type returns
/// distinct values with occurrence counts.
pub async fn extract_handler(
    ApiJson(payload): ApiJson<ExtractRequest>,
) -> Result<ApiResponse<ExtractResponse>, AppError> {
    payload.validate()?;

    let response = match payload.kind.entity_kind() {
        None => {
            let report = extract_all(&payload.text);
            let message = format!("Extracted {} entities of all types", report.total());
            ApiResponse::ok(ExtractResponse::All(report)).with_message(message)
        }
        Some(kind) => {
            let matches = kind.extract(&payload.text);
            let entities = aggregate(kind, &matches);
            let message = format!(
                "Found {} distinct {} values in {} occurrences",
                entities.len(),
                kind.as_str(),
                matches.len()
            );
            ApiResponse::ok(ExtractResponse::Single(entities)).with_message(message)
        }
    };

    Ok(response)
}

/// Character, word, sentence and paragraph statistics.
///
/// # Endpoint
///
/// `POST /api/text/stats`
pub async fn stats_handler(
    ApiJson(payload): ApiJson<TextRequest>,
) -> Result<ApiResponse<TextStats>, AppError> {
    payload.validate()?;

    Ok(ApiResponse::ok(text_stats(&payload.text)).with_message("Text statistics computed"))
}

/// Lexicon-based sentiment.
///
/// # Endpoint
///
/// `POST /api/text/sentiment`
pub async fn sentiment_handler(
    ApiJson(payload): ApiJson<TextRequest>,
) -> Result<ApiResponse<SentimentReport>, AppError> {
    payload.validate()?;

    let report = analyze_sentiment(&payload.text);
    let message = format!(
        "Detected {} sentiment ({}% confidence)",
        report.sentiment.as_str(),
        (report.confidence * 100.0).round()
    );

    Ok(ApiResponse::ok(report).with_message(message))
}
