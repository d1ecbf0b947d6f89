//! Post optimization for social platforms.
//!
//! A post is measured against its platform's length and tagging norms. Each
//! gap becomes a [`Suggestion`]; the score starts at 100 and loses points by
//! suggestion priority.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::ads::ELLIPSIS;
use crate::domain::extract::{extract_hashtags, extract_mentions, extract_urls};

/// Posting windows offered for every platform.
pub const RECOMMENDED_POSTING_TIMES: [&str; 3] = ["9:00-11:00", "14:00-16:00", "19:00-21:00"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Weibo,
    Linkedin,
    Instagram,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Weibo => "weibo",
            Platform::Linkedin => "linkedin",
            Platform::Instagram => "instagram",
        }
    }

    pub fn limits(self) -> PlatformLimits {
        let (max_length, optimal_hashtags, optimal_mentions) = match self {
            Platform::Twitter => (280, 2, 1),
            Platform::Weibo => (140, 3, 2),
            Platform::Linkedin => (1300, 5, 3),
            Platform::Instagram => (2200, 10, 2),
        };
        PlatformLimits {
            max_length,
            optimal_hashtags,
            optimal_mentions,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformLimits {
    /// In characters.
    pub max_length: usize,
    pub optimal_hashtags: usize,
    pub optimal_mentions: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentStats {
    pub length: usize,
    pub hashtags: usize,
    pub mentions: usize,
    pub urls: usize,
}

impl ContentStats {
    pub fn measure(content: &str) -> Self {
        Self {
            length: content.chars().count(),
            hashtags: extract_hashtags(content).len(),
            mentions: extract_mentions(content).len(),
            urls: extract_urls(content).len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Length,
    Hashtags,
    Mentions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    fn penalty(self) -> u32 {
        match self {
            Priority::High => 30,
            Priority::Medium => 15,
            Priority::Low => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub priority: Priority,
    pub message: String,
    pub action: &'static str,
}

/// Everything about an optimized post except the engagement forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationReport {
    pub original_content: String,
    pub optimized_content: String,
    pub platform: Platform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    pub current_stats: ContentStats,
    pub platform_limits: PlatformLimits,
    pub optimization_score: u32,
    pub suggestions: Vec<Suggestion>,
    pub recommended_posting_times: [&'static str; 3],
}

/// Forecast interactions for a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngagementPrediction {
    pub likes: u32,
    pub shares: u32,
    pub comments: u32,
}

pub fn suggestions(platform: Platform, stats: &ContentStats) -> Vec<Suggestion> {
    let limits = platform.limits();
    let mut suggestions = Vec::new();

    if stats.length > limits.max_length {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Length,
            priority: Priority::High,
            message: format!(
                "Content exceeds the {platform} limit: {} characters, shorten to {} or fewer",
                stats.length, limits.max_length
            ),
            action: "Shorten the content",
        });
    } else if stats.length * 2 < limits.max_length {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Length,
            priority: Priority::Medium,
            message: format!(
                "Content could be richer: {} characters, up to {} allowed",
                stats.length, limits.max_length
            ),
            action: "Add more content",
        });
    }

    if stats.hashtags < limits.optimal_hashtags {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Hashtags,
            priority: Priority::Medium,
            message: format!(
                "Add hashtags: {} used, {} recommended",
                stats.hashtags, limits.optimal_hashtags
            ),
            action: "Add relevant hashtags",
        });
    } else if stats.hashtags * 2 > limits.optimal_hashtags * 3 {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Hashtags,
            priority: Priority::Low,
            message: format!(
                "Too many hashtags hurt readability: {} used, keep to about {}",
                stats.hashtags, limits.optimal_hashtags
            ),
            action: "Trim hashtags",
        });
    }

    if stats.mentions > limits.optimal_mentions * 2 {
        suggestions.push(Suggestion {
            kind: SuggestionKind::Mentions,
            priority: Priority::Low,
            message: format!(
                "Many mentions can look like spam: {} used, keep to about {}",
                stats.mentions, limits.optimal_mentions
            ),
            action: "Reduce mentions",
        });
    }

    suggestions
}

/// 100 minus 30 per high, 15 per medium and 5 per low priority suggestion,
/// floored at 0.
pub fn optimization_score(suggestions: &[Suggestion]) -> u32 {
    let penalty: u32 = suggestions.iter().map(|s| s.priority.penalty()).sum();
    100u32.saturating_sub(penalty)
}

/// Cuts `content` to `max_length` characters, ending with `...`.
pub fn fit_to_length(content: &str, max_length: usize) -> String {
    if content.chars().count() <= max_length {
        return content.to_owned();
    }
    let keep = max_length.saturating_sub(ELLIPSIS.len());
    let mut cut: String = content.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}

pub fn optimize(
    content: &str,
    platform: Platform,
    target_audience: Option<String>,
) -> OptimizationReport {
    let limits = platform.limits();
    let stats = ContentStats::measure(content);
    let suggestions = suggestions(platform, &stats);

    OptimizationReport {
        original_content: content.to_owned(),
        optimized_content: fit_to_length(content, limits.max_length),
        platform,
        target_audience,
        current_stats: stats,
        platform_limits: limits,
        optimization_score: optimization_score(&suggestions),
        suggestions,
        recommended_posting_times: RECOMMENDED_POSTING_TIMES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priorities(suggestions: &[Suggestion]) -> Vec<(SuggestionKind, Priority)> {
        suggestions.iter().map(|s| (s.kind, s.priority)).collect()
    }

    #[test]
    fn test_platform_limits() {
        assert_eq!(Platform::Twitter.limits().max_length, 280);
        assert_eq!(Platform::Weibo.limits().optimal_hashtags, 3);
        assert_eq!(Platform::Linkedin.limits().optimal_mentions, 3);
        assert_eq!(Platform::Instagram.limits().max_length, 2200);
    }

    #[test]
    fn test_stats_use_entity_extractors() {
        let stats = ContentStats::measure("New drop #shoes #跑步 by @acme https://acme.io/x");
        assert_eq!(stats.hashtags, 2);
        assert_eq!(stats.mentions, 1);
        assert_eq!(stats.urls, 1);
        assert_eq!(stats.length, 46);
    }

    #[test]
    fn test_short_untagged_post_loses_thirty_points() {
        let report = optimize("Hello world", Platform::Twitter, None);

        assert_eq!(
            priorities(&report.suggestions),
            vec![
                (SuggestionKind::Length, Priority::Medium),
                (SuggestionKind::Hashtags, Priority::Medium),
            ]
        );
        assert_eq!(report.optimization_score, 70);
        assert_eq!(report.optimized_content, "Hello world");
    }

    #[test]
    fn test_long_post_is_truncated_with_ellipsis() {
        let content = format!("{} #a #b", "x".repeat(200));
        let report = optimize(&content, Platform::Weibo, Some("runners".into()));

        assert_eq!(report.optimized_content.chars().count(), 140);
        assert!(report.optimized_content.ends_with("..."));
        assert!(report.optimized_content.starts_with("xxx"));
        assert_eq!(report.suggestions[0].priority, Priority::High);
        assert_eq!(report.target_audience.as_deref(), Some("runners"));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let cut = fit_to_length(&"跑".repeat(10), 5);
        assert_eq!(cut, "跑跑...");
        assert_eq!(fit_to_length("abc", 3), "abc");
    }

    #[test]
    fn test_excess_tags_and_mentions_are_low_priority() {
        let content = format!(
            "{} #a #b #c #d @x @y @z",
            "Balanced post with plenty of words ".repeat(5)
        );
        let report = optimize(&content, Platform::Twitter, None);

        assert_eq!(
            priorities(&report.suggestions),
            vec![
                (SuggestionKind::Hashtags, Priority::Low),
                (SuggestionKind::Mentions, Priority::Low),
            ]
        );
        assert_eq!(report.optimization_score, 90);
    }

    #[test]
    fn test_score_never_goes_negative() {
        let suggestion = Suggestion {
            kind: SuggestionKind::Length,
            priority: Priority::High,
            message: String::new(),
            action: "",
        };
        assert_eq!(optimization_score(&vec![suggestion; 4]), 0);
        assert_eq!(optimization_score(&[]), 100);
    }

    #[test]
    fn test_report_serializes_suggestion_type() {
        let report = optimize("Hi", Platform::Linkedin, None);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["platform"], "linkedin");
        assert_eq!(json["suggestions"][0]["type"], "length");
        assert_eq!(json["suggestions"][0]["priority"], "medium");
        assert!(json.get("target_audience").is_none());
        assert_eq!(json["recommended_posting_times"][1], "14:00-16:00");
    }
}
