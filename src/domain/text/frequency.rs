//! Word frequency ranking.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::round2;

/// A ranked word with its share of all tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
    /// `count / total_tokens * 100`, rounded to two decimals.
    pub percentage: f64,
}

/// Aggregate figures over a token sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordStatistics {
    pub total_words: usize,
    pub unique_words: usize,
    pub avg_word_length: f64,
    pub text_length: usize,
}

/// Counts tokens and returns at most `top_n` entries.
///
/// Entries are sorted by count descending; equal counts are ordered
/// lexicographically by word. Percentages are relative to the total number
/// of tokens, not the number of distinct words. An empty input yields an
/// empty result.
pub fn frequency<S: AsRef<str>>(tokens: &[S], top_n: usize) -> Vec<FrequencyEntry> {
    if tokens.is_empty() {
        return Vec::new();
    }

    let total = tokens.len() as f64;
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_ref()).or_default() += 1;
    }

    let mut entries: Vec<FrequencyEntry> = counts
        .into_iter()
        .map(|(word, count)| FrequencyEntry {
            word: word.to_owned(),
            count,
            percentage: round2(count as f64 / total * 100.0),
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    entries.truncate(top_n);
    entries
}

/// Summarizes a token sequence extracted from `text`.
pub fn word_statistics<S: AsRef<str>>(tokens: &[S], text: &str) -> WordStatistics {
    let unique: HashSet<&str> = tokens.iter().map(AsRef::as_ref).collect();
    let total_chars: usize = tokens.iter().map(|t| t.as_ref().chars().count()).sum();

    let avg_word_length = if tokens.is_empty() {
        0.0
    } else {
        round2(total_chars as f64 / tokens.len() as f64)
    };

    WordStatistics {
        total_words: tokens.len(),
        unique_words: unique.len(),
        avg_word_length,
        text_length: text.chars().count(),
    }
}
