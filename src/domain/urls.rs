//! URL parsing, tracking-parameter cleanup and domain grouping.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use url::Url;

/// Query parameters stripped by [`cleanup_url`].
pub const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "gclid",
    "fbclid",
    "msclkid",
    "_ga",
    "mc_eid",
    "mc_cid",
];

/// Fragments starting with one of these are treated as tracking data.
const TRACKING_FRAGMENT_PREFIXES: &[&str] = &["utm_", "gid="];

/// Number of domains listed in [`ParseStatistics::domains`].
const MAX_LISTED_DOMAINS: usize = 20;

/// Errors produced when a URL is required to be a fetchable web address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlToolError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Parses `input` and requires an `http` or `https` scheme.
///
/// # Errors
///
/// Returns [`UrlToolError::InvalidFormat`] for malformed input and
/// [`UrlToolError::UnsupportedProtocol`] for other schemes such as
/// `javascript:`, `file:` or `ftp:`.
pub fn parse_http_url(input: &str) -> Result<Url, UrlToolError> {
    let url = Url::parse(input.trim()).map_err(|e| UrlToolError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(UrlToolError::UnsupportedProtocol),
    }
}

/// Returns `true` if `input` is an absolute URL of any scheme.
pub fn is_valid_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}

/// Components of a single URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedUrl {
    pub original_url: String,
    /// Scheme without the trailing colon, e.g. `https`.
    pub protocol: String,
    pub domain: String,
    pub path: String,
    /// Decoded query parameters; a repeated key keeps its last value.
    pub query_params: BTreeMap<String, String>,
    /// Fragment without the leading `#`.
    pub fragment: String,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Splits a URL into components. Malformed input yields `is_valid: false`.
pub fn parse_url(input: &str) -> ParsedUrl {
    match Url::parse(input) {
        Ok(url) => ParsedUrl {
            original_url: input.to_owned(),
            protocol: url.scheme().to_owned(),
            domain: url.host_str().unwrap_or_default().to_owned(),
            path: url.path().to_owned(),
            query_params: url.query_pairs().into_owned().collect(),
            fragment: url.fragment().unwrap_or_default().to_owned(),
            is_valid: true,
            error: None,
        },
        Err(_) => ParsedUrl {
            original_url: input.to_owned(),
            protocol: String::new(),
            domain: String::new(),
            path: String::new(),
            query_params: BTreeMap::new(),
            fragment: String::new(),
            is_valid: false,
            error: Some("Invalid URL format".to_owned()),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseStatistics {
    pub total_urls: usize,
    pub valid_urls: usize,
    pub invalid_urls: usize,
    pub unique_domains: usize,
    pub protocols: Vec<String>,
    /// First distinct domains in input order.
    pub domains: Vec<String>,
}

/// Summarizes a batch of parse results.
pub fn parse_statistics(results: &[ParsedUrl]) -> ParseStatistics {
    let valid: Vec<&ParsedUrl> = results.iter().filter(|r| r.is_valid).collect();

    let mut domains: Vec<String> = Vec::new();
    let mut protocols: Vec<String> = Vec::new();
    for parsed in &valid {
        if !domains.contains(&parsed.domain) {
            domains.push(parsed.domain.clone());
        }
        if !protocols.contains(&parsed.protocol) {
            protocols.push(parsed.protocol.clone());
        }
    }

    let unique_domains = domains.len();
    domains.truncate(MAX_LISTED_DOMAINS);

    ParseStatistics {
        total_urls: results.len(),
        valid_urls: valid.len(),
        invalid_urls: results.len() - valid.len(),
        unique_domains,
        protocols,
        domains,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanedUrl {
    pub original: String,
    pub cleaned: String,
    pub removed_params: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Removes tracking query parameters and tracking fragments.
///
/// Other parameters keep their order. Invalid input is returned unchanged
/// with `error` set.
pub fn cleanup_url(input: &str) -> CleanedUrl {
    let mut url = match Url::parse(input.trim()) {
        Ok(url) => url,
        Err(_) => {
            return CleanedUrl {
                original: input.to_owned(),
                cleaned: input.to_owned(),
                removed_params: Vec::new(),
                error: Some("Invalid URL format".to_owned()),
            };
        }
    };

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let removed_params: Vec<String> = TRACKING_PARAMS
        .iter()
        .filter(|param| pairs.iter().any(|(key, _)| key == *param))
        .map(|param| (*param).to_owned())
        .collect();

    if !removed_params.is_empty() {
        let kept: Vec<&(String, String)> = pairs
            .iter()
            .filter(|(key, _)| !TRACKING_PARAMS.contains(&key.as_str()))
            .collect();

        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut()
                .clear()
                .extend_pairs(kept.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
    }

    let tracking_fragment = url
        .fragment()
        .is_some_and(|f| TRACKING_FRAGMENT_PREFIXES.iter().any(|p| f.starts_with(p)));
    if tracking_fragment {
        url.set_fragment(None);
    }

    CleanedUrl {
        original: input.to_owned(),
        cleaned: url.to_string(),
        removed_params,
        error: None,
    }
}

/// URLs sharing one registrable-looking domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainGroup {
    pub domain: String,
    pub count: usize,
    pub urls: Vec<String>,
    pub subdomains: Vec<String>,
    pub protocols: Vec<String>,
}

/// Approximates the root domain: drops `www.` and keeps the last two labels.
///
/// This does not consult the public suffix list, so `example.co.uk`
/// collapses to `co.uk`.
pub fn root_domain(host: &str) -> String {
    let host = host.strip_prefix("www.").unwrap_or(host);
    let labels: Vec<&str> = host.split('.').collect();
    labels[labels.len().saturating_sub(2)..].join(".")
}

/// Groups URLs by root domain, most frequent first. Invalid URLs are skipped.
pub fn analyze_domains<S: AsRef<str>>(urls: &[S]) -> Vec<DomainGroup> {
    let mut groups: Vec<DomainGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for raw in urls {
        let raw = raw.as_ref();
        let Ok(url) = Url::parse(raw.trim()) else {
            continue;
        };
        let Some(host) = url.host_str() else {
            continue;
        };

        let root = root_domain(host);
        let i = *index.entry(root.clone()).or_insert_with(|| {
            groups.push(DomainGroup {
                domain: root,
                count: 0,
                urls: Vec::new(),
                subdomains: Vec::new(),
                protocols: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[i];
        group.count += 1;
        group.urls.push(raw.to_owned());
        if !group.subdomains.iter().any(|s| s == host) {
            group.subdomains.push(host.to_owned());
        }
        if !group.protocols.iter().any(|p| p == url.scheme()) {
            group.protocols.push(url.scheme().to_owned());
        }
    }

    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups
}
