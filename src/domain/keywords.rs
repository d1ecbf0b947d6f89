//! SEM keyword combination.

use std::collections::HashSet;

use serde::Serialize;

/// Commercial-intent modifiers appended when callers ask for expansion.
pub const COMMON_MODIFIERS: &[&str] = &[
    "buy", "price", "cost", "review", "best", "cheap", "near me", "online", "official", "brand",
    "deals", "free", "discount", "service",
];

/// A generated keyword and the terms it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCandidate {
    pub keyword: String,
    pub seed: String,
    /// `None` for a bare seed.
    pub modifier: Option<String>,
    /// Length of `keyword` in characters.
    pub length: usize,
}

impl KeywordCandidate {
    fn new(keyword: String, seed: &str, modifier: Option<&str>) -> Self {
        let length = keyword.chars().count();
        Self {
            keyword,
            seed: seed.to_owned(),
            modifier: modifier.map(str::to_owned),
            length,
        }
    }
}

fn clean_terms<S: AsRef<str>>(terms: &[S]) -> Vec<&str> {
    terms
        .iter()
        .map(|t| t.as_ref().trim())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Builds deduplicated keyword candidates from seeds and modifiers.
///
/// Terms are trimmed and blanks dropped. Every seed is kept verbatim, and
/// each `(seed, modifier)` pair contributes `"modifier seed"` and
/// `"seed modifier"`. When a keyword can be produced more than once, the
/// first producer (seeds before combinations) is recorded.
///
/// Output is sorted by length, then lexicographically.
pub fn generate_candidates<S: AsRef<str>, M: AsRef<str>>(
    seeds: &[S],
    modifiers: &[M],
) -> Vec<KeywordCandidate> {
    let seeds = clean_terms(seeds);
    let modifiers = clean_terms(modifiers);

    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();
    let mut push = |keyword: String, seed: &str, modifier: Option<&str>| {
        if seen.insert(keyword.clone()) {
            candidates.push(KeywordCandidate::new(keyword, seed, modifier));
        }
    };

    for seed in &seeds {
        push((*seed).to_owned(), *seed, None);
    }

    for seed in &seeds {
        for modifier in &modifiers {
            push(format!("{modifier} {seed}"), *seed, Some(*modifier));
            push(format!("{seed} {modifier}"), *seed, Some(*modifier));
        }
    }

    candidates.sort_by(|a, b| {
        a.length
            .cmp(&b.length)
            .then_with(|| a.keyword.cmp(&b.keyword))
    });
    candidates
}

/// Returns the deduplicated keyword strings for `seeds` × `modifiers`.
///
/// Equivalent to [`generate_candidates`] without provenance.
pub fn combine<S: AsRef<str>, M: AsRef<str>>(seeds: &[S], modifiers: &[M]) -> Vec<String> {
    generate_candidates(seeds, modifiers)
        .into_iter()
        .map(|c| c.keyword)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_combine_single_pair() {
        let result: BTreeSet<String> = combine(&["shoe"], &["buy"]).into_iter().collect();
        let expected: BTreeSet<String> = ["shoe", "buy shoe", "shoe buy"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_combine_without_modifiers_returns_seeds() {
        let modifiers: [&str; 0] = [];
        assert_eq!(combine(&["boots", "shoe"], &modifiers), vec!["shoe", "boots"]);
    }

    #[test]
    fn test_combine_trims_and_drops_blank_terms() {
        let result = combine(&["  shoe ", ""], &[" ", "buy "]);
        assert_eq!(result, vec!["shoe", "buy shoe", "shoe buy"]);
    }

    #[test]
    fn test_combine_deduplicates() {
        // "a b" is produced by (a, b) and (b, a)
        let result = combine(&["a", "b"], &["a", "b"]);
        let unique: HashSet<_> = result.iter().collect();
        assert_eq!(unique.len(), result.len());
        assert_eq!(result, vec!["a", "b", "a a", "a b", "b a", "b b"]);
    }

    #[test]
    fn test_combine_sorted_by_length_then_lexicographic() {
        let result = combine(&["running shoes"], &["buy", "cheap"]);
        assert_eq!(
            result,
            vec![
                "running shoes",
                "buy running shoes",
                "running shoes buy",
                "cheap running shoes",
                "running shoes cheap",
            ]
        );
    }

    #[test]
    fn test_combine_non_empty_for_non_empty_seeds() {
        let modifiers: Vec<String> = Vec::new();
        assert!(!combine(&["x"], &modifiers).is_empty());
    }

    #[test]
    fn test_candidates_record_provenance() {
        let candidates = generate_candidates(&["shoe"], &["buy"]);
        let bare = candidates.iter().find(|c| c.keyword == "shoe").unwrap();
        assert_eq!(bare.modifier, None);
        assert_eq!(bare.length, 4);

        let combined = candidates.iter().find(|c| c.keyword == "buy shoe").unwrap();
        assert_eq!(combined.seed, "shoe");
        assert_eq!(combined.modifier.as_deref(), Some("buy"));
        assert_eq!(combined.length, 8);
    }

    #[test]
    fn test_candidate_length_counts_characters() {
        let candidates = generate_candidates(&["鞋子"], &["购买"]);
        assert!(candidates.iter().any(|c| c.keyword == "购买 鞋子" && c.length == 5));
    }
}
