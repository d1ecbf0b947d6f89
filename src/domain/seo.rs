//! On-page SEO extraction plus robots.txt and sitemap parsing.
//!
//! Everything here works on already-fetched text; fetching lives behind
//! [`crate::domain::providers::PageFetcher`].

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use serde::Serialize;
use url::Url;

use super::text::tokenize;

static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());
static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
static H2: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2").unwrap());
static H3: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h3").unwrap());
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());
static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

static SITEMAP_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<(url|sitemap)>(.*?)</(?:url|sitemap)>").unwrap());
static SITEMAP_LOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<loc>\s*(.*?)\s*</loc>").unwrap());
static SITEMAP_LASTMOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<lastmod>\s*(.*?)\s*</lastmod>").unwrap());
static SITEMAP_CHANGEFREQ: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<changefreq>\s*(.*?)\s*</changefreq>").unwrap());
static SITEMAP_PRIORITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<priority>\s*(.*?)\s*</priority>").unwrap());

/// Minimum token length used for page word counts.
const WORD_MIN_LENGTH: usize = 2;

/// SEO summary of one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrawlResult {
    pub url: String,
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
    pub status_code: u16,
    pub word_count: usize,
    pub links_internal: usize,
    pub links_external: usize,
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn headings(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .filter_map(|el| non_empty(el.text().collect::<String>()))
        .collect()
}

/// Extracts title, description, headings, word count and link counts.
///
/// Links are resolved against `page_url`; a link is internal when it lands
/// on the same host. Unresolvable root-relative links count as internal.
pub fn extract_page_seo(html: &str, page_url: &Url, status_code: u16) -> CrawlResult {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE)
        .next()
        .and_then(|el| non_empty(el.text().collect()));
    let meta_description = document
        .select(&META_DESCRIPTION)
        .next()
        .and_then(|el| el.value().attr("content"))
        .and_then(|content| non_empty(content.to_owned()));

    let host = page_url.host_str();
    let (mut links_internal, mut links_external) = (0, 0);
    for href in document
        .select(&ANCHOR)
        .filter_map(|el| el.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
    {
        match page_url.join(href) {
            Ok(resolved) if resolved.host_str() == host => links_internal += 1,
            Ok(_) => links_external += 1,
            Err(_) if href.starts_with('/') => links_internal += 1,
            Err(_) => {}
        }
    }

    let text: String = match document.select(&BODY).next() {
        Some(body) => body.text().collect::<Vec<_>>().join(" "),
        None => document.root_element().text().collect::<Vec<_>>().join(" "),
    };

    CrawlResult {
        url: page_url.to_string(),
        title,
        meta_description,
        h1: headings(&document, &H1),
        h2: headings(&document, &H2),
        h3: headings(&document, &H3),
        status_code,
        word_count: tokenize(&text, WORD_MIN_LENGTH).len(),
        links_internal,
        links_external,
    }
}

/// One robots.txt directive in the scope of a user agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotsRule {
    pub user_agent: String,
    pub directive: String,
    pub value: String,
}

impl RobotsRule {
    pub fn new(user_agent: &str, directive: &str, value: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.to_owned(),
            directive: directive.to_owned(),
            value: value.into(),
        }
    }
}

/// Location of the robots.txt file for the origin of `page_url`.
pub fn robots_url(page_url: &Url) -> Url {
    let mut url = page_url.clone();
    url.set_path("/robots.txt");
    url.set_query(None);
    url.set_fragment(None);
    url
}

/// Parses robots.txt into `Allow`, `Disallow`, `Sitemap` and `Crawl-delay`
/// rules, each tagged with the most recent `User-agent` (`*` before any).
///
/// Comments, blank lines and unknown directives are ignored.
pub fn parse_robots(content: &str) -> Vec<RobotsRule> {
    let mut rules = Vec::new();
    let mut user_agent = String::from("*");

    for line in content.lines() {
        let line = line.split('#').next().unwrap_or_default().trim();
        let Some((directive, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();

        let directive = match directive.trim().to_lowercase().as_str() {
            "user-agent" => {
                user_agent = value.to_owned();
                continue;
            }
            "allow" => "Allow",
            "disallow" => "Disallow",
            "sitemap" => "Sitemap",
            "crawl-delay" => "Crawl-delay",
            _ => continue,
        };
        rules.push(RobotsRule::new(&user_agent, directive, value));
    }

    rules
}

/// A `<url>` (or `<sitemap>` index) entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

fn decode_xml_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn capture(pattern: &Regex, block: &str) -> Option<String> {
    pattern
        .captures(block)
        .and_then(|c| c.get(1))
        .map(|m| decode_xml_entities(m.as_str()))
        .filter(|s| !s.is_empty())
}

/// Parses a urlset or sitemap index.
///
/// Fields are read per entry, so an entry missing `<lastmod>` does not shift
/// the dates of the entries after it. Entries without `<loc>` are skipped.
pub fn parse_sitemap(content: &str) -> Vec<SitemapEntry> {
    SITEMAP_BLOCK
        .captures_iter(content)
        .filter_map(|cap| {
            let block = cap.get(2)?.as_str();
            Some(SitemapEntry {
                loc: capture(&SITEMAP_LOC, block)?,
                lastmod: capture(&SITEMAP_LASTMOD, block),
                changefreq: capture(&SITEMAP_CHANGEFREQ, block),
                priority: capture(&SITEMAP_PRIORITY, block),
            })
        })
        .collect()
}
