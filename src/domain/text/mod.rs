//! Text analysis primitives.
//!
//! - [`tokenizer`] - Normalizes free text into word tokens
//! - [`frequency`] - Ranks tokens by occurrence
//! - [`stats`] - Character, sentence and language statistics
//! - [`sentiment`] - Lexicon-based sentiment scoring
//!
//! Everything here is pure and synchronous.

pub mod frequency;
pub mod sentiment;
pub mod stats;
pub mod tokenizer;

pub use frequency::{FrequencyEntry, WordStatistics, frequency, word_statistics};
pub use sentiment::{SentimentLabel, SentimentReport, analyze_sentiment};
pub use stats::{Language, TextStats, text_stats};
pub use tokenizer::tokenize;

/// Rounds a value to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Returns `true` for characters in the CJK Unified Ideographs block.
pub fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}
