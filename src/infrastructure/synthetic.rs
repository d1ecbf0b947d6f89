//! Placeholder SEO data returned when a live fetch fails, and the random
//! engagement forecast of the content optimizer.
//!
//! SEO responses built from these are tagged
//! [`DataSource::Synthetic`](crate::domain::providers::DataSource).

use rand::Rng;
use url::Url;

use crate::domain::seo::{CrawlResult, RobotsRule, SitemapEntry};
use crate::domain::social::EngagementPrediction;

fn host(url: &Url) -> &str {
    url.host_str().unwrap_or("example.com")
}

/// Stand-in for a page that could not be fetched.
pub fn crawl_page(url: &Url) -> CrawlResult {
    let host = host(url);
    CrawlResult {
        url: url.to_string(),
        title: Some(format!("Example site title - {host}")),
        meta_description: Some(
            "Sample description showing what the SEO crawler reports for a page".to_owned(),
        ),
        h1: vec!["Main heading".to_owned()],
        h2: vec!["Subheading 1".to_owned(), "Subheading 2".to_owned()],
        h3: vec![
            "Minor heading 1".to_owned(),
            "Minor heading 2".to_owned(),
            "Minor heading 3".to_owned(),
        ],
        status_code: 200,
        word_count: 850,
        links_internal: 25,
        links_external: 8,
    }
}

/// `count` follow-up pages under `base` with randomized metrics.
pub fn crawl_followups(base: &Url, count: usize) -> Vec<CrawlResult> {
    let host = host(base);
    let root = base.as_str().trim_end_matches('/');
    let mut rng = rand::rng();

    (1..=count)
        .map(|i| CrawlResult {
            url: format!("{root}/page-{i}"),
            title: Some(format!("Page {i} - {host}")),
            meta_description: Some(format!("Description of page {i} on {host}")),
            h1: vec![format!("Page {i} main heading")],
            h2: vec![format!("Subheading {i}-1"), format!("Subheading {i}-2")],
            h3: vec![format!("Minor heading {i}-1")],
            status_code: 200,
            word_count: rng.random_range(200..1200),
            links_internal: rng.random_range(10..60),
            links_external: rng.random_range(5..25),
        })
        .collect()
}

/// Four typical pages on the host of `url`.
pub fn sitemap(url: &Url) -> Vec<SitemapEntry> {
    let host = host(url);
    [
        ("", "2024-01-15", "daily", "1.0"),
        ("about", "2024-01-10", "monthly", "0.8"),
        ("products", "2024-01-12", "weekly", "0.9"),
        ("contact", "2024-01-08", "monthly", "0.7"),
    ]
    .into_iter()
    .map(|(path, lastmod, changefreq, priority)| SitemapEntry {
        loc: format!("https://{host}/{path}"),
        lastmod: Some(lastmod.to_owned()),
        changefreq: Some(changefreq.to_owned()),
        priority: Some(priority.to_owned()),
    })
    .collect()
}

/// A conventional robots.txt for the origin of `url`.
pub fn robots(url: &Url) -> Vec<RobotsRule> {
    let origin = url.origin().ascii_serialization();
    vec![
        RobotsRule::new("*", "Disallow", "/admin/"),
        RobotsRule::new("*", "Disallow", "/private/"),
        RobotsRule::new("*", "Allow", "/"),
        RobotsRule::new("*", "Sitemap", format!("{origin}/sitemap.xml")),
    ]
}

/// Random interaction counts; no model stands behind them.
pub fn engagement_prediction() -> EngagementPrediction {
    let mut rng = rand::rng();
    EngagementPrediction {
        likes: rng.random_range(20..120),
        shares: rng.random_range(10..60),
        comments: rng.random_range(5..35),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://shop.example.com/").unwrap()
    }

    #[test]
    fn test_crawl_page_uses_host() {
        let page = crawl_page(&url());
        assert_eq!(page.url, "https://shop.example.com/");
        assert_eq!(page.title.as_deref(), Some("Example site title - shop.example.com"));
    }

    #[test]
    fn test_crawl_followups() {
        let pages = crawl_followups(&url(), 3);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].url, "https://shop.example.com/page-1");
        assert_eq!(pages[2].url, "https://shop.example.com/page-3");
        for page in &pages {
            assert!((200..1200).contains(&page.word_count));
            assert!((10..60).contains(&page.links_internal));
            assert!((5..25).contains(&page.links_external));
        }
        assert!(crawl_followups(&url(), 0).is_empty());
    }

    #[test]
    fn test_sitemap_has_four_entries() {
        let entries = sitemap(&url());
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].loc, "https://shop.example.com/");
        assert_eq!(entries[1].loc, "https://shop.example.com/about");
    }

    #[test]
    fn test_robots_points_to_origin_sitemap() {
        let rules = robots(&Url::parse("http://example.com:8080/a/b").unwrap());
        assert_eq!(rules.len(), 4);
        assert_eq!(rules[3].value, "http://example.com:8080/sitemap.xml");
    }

    #[test]
    fn test_engagement_prediction_ranges() {
        for _ in 0..50 {
            let prediction = engagement_prediction();
            assert!((20..120).contains(&prediction.likes));
            assert!((10..60).contains(&prediction.shares));
            assert!((5..35).contains(&prediction.comments));
        }
    }
}
