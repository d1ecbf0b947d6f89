//! Lexical entity extraction: URLs, emails, hashtags, mentions and numbers.
//!
//! Each [`EntityKind`] owns one pattern. Extraction returns every
//! non-overlapping match left to right, duplicates included, so callers can
//! count occurrences.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)https?://\S+").unwrap());
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());
static HASHTAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9A-Za-z_\x{4e00}-\x{9fff}]+").unwrap());
static MENTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[0-9A-Za-z_\x{4e00}-\x{9fff}]+").unwrap());
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Url,
    Email,
    Hashtag,
    Mention,
    Number,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Url,
        EntityKind::Email,
        EntityKind::Hashtag,
        EntityKind::Mention,
        EntityKind::Number,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            EntityKind::Url => &URL_PATTERN,
            EntityKind::Email => &EMAIL_PATTERN,
            EntityKind::Hashtag => &HASHTAG_PATTERN,
            EntityKind::Mention => &MENTION_PATTERN,
            EntityKind::Number => &NUMBER_PATTERN,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Url => "url",
            EntityKind::Email => "email",
            EntityKind::Hashtag => "hashtag",
            EntityKind::Mention => "mention",
            EntityKind::Number => "number",
        }
    }

    /// Returns all matches of this kind in `text`.
    pub fn extract(self, text: &str) -> Vec<String> {
        self.pattern()
            .find_iter(text)
            .map(|m| m.as_str().to_owned())
            .collect()
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn extract_urls(text: &str) -> Vec<String> {
    EntityKind::Url.extract(text)
}

pub fn extract_emails(text: &str) -> Vec<String> {
    EntityKind::Email.extract(text)
}

pub fn extract_hashtags(text: &str) -> Vec<String> {
    EntityKind::Hashtag.extract(text)
}

pub fn extract_mentions(text: &str) -> Vec<String> {
    EntityKind::Mention.extract(text)
}

pub fn extract_numbers(text: &str) -> Vec<String> {
    EntityKind::Number.extract(text)
}

/// A distinct matched value with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub value: String,
    pub count: usize,
}

/// Groups raw matches by exact value.
///
/// Sorted by count descending; equal counts keep first-appearance order.
pub fn aggregate(kind: EntityKind, matches: &[String]) -> Vec<Entity> {
    let mut entities: Vec<Entity> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for value in matches {
        match index.get(value.as_str()) {
            Some(&i) => entities[i].count += 1,
            None => {
                index.insert(value.as_str(), entities.len());
                entities.push(Entity {
                    kind,
                    value: value.clone(),
                    count: 1,
                });
            }
        }
    }

    entities.sort_by(|a, b| b.count.cmp(&a.count));
    entities
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityCount {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub count: usize,
}

/// Result of running every extractor over one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityReport {
    /// Per-kind match totals; kinds without matches are omitted.
    pub summary: Vec<EntityCount>,
    pub urls: Vec<String>,
    pub emails: Vec<String>,
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
    pub numbers: Vec<String>,
}

impl EntityReport {
    /// Total number of matches across all kinds.
    pub fn total(&self) -> usize {
        self.summary.iter().map(|s| s.count).sum()
    }
}

/// Runs all five extractors once and derives the summary from their output.
pub fn extract_all(text: &str) -> EntityReport {
    let urls = extract_urls(text);
    let emails = extract_emails(text);
    let hashtags = extract_hashtags(text);
    let mentions = extract_mentions(text);
    let numbers = extract_numbers(text);

    let summary = [
        (EntityKind::Url, urls.len()),
        (EntityKind::Email, emails.len()),
        (EntityKind::Hashtag, hashtags.len()),
        (EntityKind::Mention, mentions.len()),
        (EntityKind::Number, numbers.len()),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(kind, count)| EntityCount { kind, count })
    .collect();

    EntityReport {
        summary,
        urls,
        emails,
        hashtags,
        mentions,
        numbers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hashtags_in_order() {
        assert_eq!(
            extract_hashtags("I love #sale and #sale2024"),
            vec!["#sale", "#sale2024"]
        );
    }

    #[test]
    fn test_extract_hashtags_cjk() {
        assert_eq!(extract_hashtags("新品 #双十一 上市"), vec!["#双十一"]);
    }

    #[test]
    fn test_extract_urls() {
        let text = "See https://example.com/a?b=1 and HTTP://Foo.org, or ftp://nope";
        assert_eq!(
            extract_urls(text),
            vec!["https://example.com/a?b=1", "HTTP://Foo.org,"]
        );
    }

    #[test]
    fn test_extract_emails() {
        let text = "Contact sales@example.com or john.doe+ads@mail.co.uk, not bob@local";
        assert_eq!(
            extract_emails(text),
            vec!["sales@example.com", "john.doe+ads@mail.co.uk"]
        );
    }

    #[test]
    fn test_extract_mentions() {
        assert_eq!(
            extract_mentions("thanks @alice and @bob_99!"),
            vec!["@alice", "@bob_99"]
        );
    }

    #[test]
    fn test_extract_numbers() {
        assert_eq!(
            extract_numbers("Up 12.5% from 3 to 4. Version 2."),
            vec!["12.5", "3", "4", "2"]
        );
    }

    #[test]
    fn test_extract_keeps_duplicates() {
        assert_eq!(extract_numbers("7 7 7"), vec!["7", "7", "7"]);
    }

    #[test]
    fn test_aggregate_groups_and_sorts() {
        let matches = extract_hashtags("#a #b #b #c #b #a");
        let entities = aggregate(EntityKind::Hashtag, &matches);

        assert_eq!(entities.len(), 3);
        assert_eq!(entities[0].value, "#b");
        assert_eq!(entities[0].count, 3);
        assert_eq!(entities[1].value, "#a");
        assert_eq!(entities[1].count, 2);
        assert_eq!(entities[2].value, "#c");
        assert!(entities.iter().all(|e| e.kind == EntityKind::Hashtag));
    }

    #[test]
    fn test_extract_all_summary_matches_lists() {
        let report = extract_all("Mail me@site.io about #deal, 2 items at https://shop.example");

        assert_eq!(report.urls, vec!["https://shop.example"]);
        assert_eq!(report.emails, vec!["me@site.io"]);
        assert_eq!(report.hashtags, vec!["#deal"]);
        assert_eq!(report.mentions, vec!["@site"]);
        assert_eq!(report.numbers, vec!["2"]);
        assert_eq!(report.summary.len(), 5);
        assert_eq!(report.total(), 5);
    }

    #[test]
    fn test_extract_all_omits_empty_kinds() {
        let report = extract_all("only #tags here #two");
        assert_eq!(
            report.summary,
            vec![EntityCount {
                kind: EntityKind::Hashtag,
                count: 2
            }]
        );
    }

    #[test]
    fn test_entity_kind_serializes_lowercase() {
        let json = serde_json::to_value(EntityKind::Hashtag).unwrap();
        assert_eq!(json, "hashtag");
    }
}
