//! Lexicon-based sentiment scoring.
//!
//! This is a keyword heuristic, not a language model: it counts
//! occurrences of fixed positive and negative terms in the lower-cased text.

use serde::Serialize;

use super::round2;

const POSITIVE_TERMS: &[&str] = &[
    "好", "优秀", "棒", "赞", "喜欢", "满意", "推荐", "good", "great", "excellent", "amazing",
    "love", "like",
];

const NEGATIVE_TERMS: &[&str] = &[
    "坏", "差", "糟糕", "不好", "讨厌", "失望", "垃圾", "bad", "terrible", "awful", "hate",
    "dislike", "poor",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentIndicators {
    pub positive_indicators: Vec<&'static str>,
    pub negative_indicators: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentReport {
    pub sentiment: SentimentLabel,
    /// In `[-1, 1]`; negative values mean negative sentiment.
    pub score: f64,
    pub confidence: f64,
    pub positive_words: usize,
    pub negative_words: usize,
    pub details: SentimentIndicators,
}

fn count_terms(text: &str, terms: &[&str]) -> usize {
    terms.iter().map(|term| text.matches(term).count()).sum()
}

fn matched_terms(text: &str, terms: &[&'static str]) -> Vec<&'static str> {
    terms.iter().copied().filter(|t| text.contains(t)).collect()
}

/// Scores the sentiment of `text`.
///
/// The score is `(positive - negative) / max(positive + negative, 1)`,
/// clamped to `[-1, 1]`. Confidence is the score's magnitude.
pub fn analyze_sentiment(text: &str) -> SentimentReport {
    let lowered = text.to_lowercase();
    let positive = count_terms(&lowered, POSITIVE_TERMS);
    let negative = count_terms(&lowered, NEGATIVE_TERMS);
    let total = (positive + negative).max(1) as f64;

    let (sentiment, score) = match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => (
            SentimentLabel::Positive,
            ((positive - negative) as f64 / total).min(1.0),
        ),
        std::cmp::Ordering::Less => (
            SentimentLabel::Negative,
            -((negative - positive) as f64 / total).min(1.0),
        ),
        std::cmp::Ordering::Equal => (SentimentLabel::Neutral, 0.0),
    };

    SentimentReport {
        sentiment,
        score: round2(score),
        confidence: round2(score.abs()),
        positive_words: positive,
        negative_words: negative,
        details: SentimentIndicators {
            positive_indicators: matched_terms(&lowered, POSITIVE_TERMS),
            negative_indicators: matched_terms(&lowered, NEGATIVE_TERMS),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_sentiment() {
        let report = analyze_sentiment("Great product, I LOVE it");
        assert_eq!(report.sentiment, SentimentLabel::Positive);
        assert_eq!(report.positive_words, 2);
        assert_eq!(report.negative_words, 0);
        assert_eq!(report.score, 1.0);
        assert_eq!(report.confidence, 1.0);
        assert_eq!(report.details.positive_indicators, vec!["great", "love"]);
    }

    #[test]
    fn test_negative_sentiment() {
        let report = analyze_sentiment("terrible service, awful food, but good coffee");
        assert_eq!(report.sentiment, SentimentLabel::Negative);
        assert_eq!(report.positive_words, 1);
        assert_eq!(report.negative_words, 2);
        assert_eq!(report.score, -0.33);
        assert_eq!(report.confidence, 0.33);
    }

    #[test]
    fn test_neutral_sentiment() {
        let report = analyze_sentiment("The meeting is at noon.");
        assert_eq!(report.sentiment, SentimentLabel::Neutral);
        assert_eq!(report.score, 0.0);
        assert!(report.details.positive_indicators.is_empty());
    }

    #[test]
    fn test_substring_terms_are_counted() {
        // "dislike" also contains "like"
        let report = analyze_sentiment("dislike");
        assert_eq!(report.positive_words, 1);
        assert_eq!(report.negative_words, 1);
        assert_eq!(report.sentiment, SentimentLabel::Neutral);
    }
}
