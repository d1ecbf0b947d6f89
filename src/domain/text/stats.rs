//! Descriptive statistics for a block of text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::{is_cjk_ideograph, round2, tokenize};

/// Average silent reading speed used for reading time estimates.
const WORDS_PER_MINUTE: usize = 200;

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());
static ASCII_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z]+").unwrap());

/// Dominant script of a text, decided by a simple count heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Language {
    Chinese,
    English,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub reading_time_minutes: usize,
    pub primary_language: Language,
    pub chinese_characters: usize,
    pub english_words: usize,
    pub avg_words_per_sentence: f64,
    pub avg_sentence_length: f64,
}

/// Computes character, word, sentence and paragraph counts.
///
/// Sentences are separated by runs of `.`, `!` or `?`; paragraphs by blank
/// lines. The language is `Chinese` when CJK ideographs outnumber ASCII
/// letter runs.
pub fn text_stats(text: &str) -> TextStats {
    let characters = text.chars().count();
    let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();
    let words = tokenize(text, 1).len();

    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();

    let paragraphs = PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .count();

    let chinese_characters = text.chars().filter(|c| is_cjk_ideograph(*c)).count();
    let english_words = ASCII_WORD.find_iter(text).count();

    let primary_language = if chinese_characters > english_words {
        Language::Chinese
    } else {
        Language::English
    };

    let (avg_words_per_sentence, avg_sentence_length) = if sentences > 0 {
        (
            round2(words as f64 / sentences as f64),
            round2(characters as f64 / sentences as f64),
        )
    } else {
        (0.0, 0.0)
    };

    TextStats {
        characters,
        characters_no_spaces,
        words,
        sentences,
        paragraphs,
        reading_time_minutes: words.div_ceil(WORDS_PER_MINUTE),
        primary_language,
        chinese_characters,
        english_words,
        avg_words_per_sentence,
        avg_sentence_length,
    }
}
