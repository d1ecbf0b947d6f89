//! SEO data collection with graceful fallback.

use std::sync::Arc;

use tracing::{info, warn};
use url::Url;

use crate::domain::providers::{
    GoogleCredentials, PageFetcher, SerpProvider, SerpQuery, SerpResult, Sourced,
};
use crate::domain::seo::{
    CrawlResult, RobotsRule, SitemapEntry, extract_page_seo, parse_robots, parse_sitemap,
    robots_url,
};
use crate::infrastructure::credentials::CredentialStore;
use crate::infrastructure::serp::SyntheticSerpProvider;
use crate::infrastructure::synthetic;

/// Crawls never report more than this many pages.
pub const MAX_CRAWL_PAGES: usize = 5;

/// Fetches live SEO data and substitutes synthetic data when the network
/// or a provider fails.
///
/// No method here returns an error: every failure is logged at WARN and
/// answered with [`Sourced::synthetic`] data.
pub struct SeoService {
    fetcher: Arc<dyn PageFetcher>,
    live_serp: Arc<dyn SerpProvider>,
    fallback_serp: Arc<dyn SerpProvider>,
    credentials: Arc<CredentialStore>,
}

impl SeoService {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        live_serp: Arc<dyn SerpProvider>,
        credentials: Arc<CredentialStore>,
    ) -> Self {
        Self {
            fetcher,
            live_serp,
            fallback_serp: Arc::new(SyntheticSerpProvider),
            credentials,
        }
    }

    /// Name of the provider tried before the synthetic fallback.
    pub fn live_provider_name(&self) -> &'static str {
        self.live_serp.name()
    }

    /// Analyzes `url` and appends `min(limit, 5) - 1` synthetic follow-up
    /// pages. The source tag describes the first page.
    pub async fn crawl(&self, url: &Url, limit: usize) -> Sourced<Vec<CrawlResult>> {
        match self.fetcher.fetch(url).await {
            Ok(page) => {
                let mut pages = vec![extract_page_seo(&page.body, url, page.status)];
                let followups = limit.min(MAX_CRAWL_PAGES).saturating_sub(1);
                pages.extend(synthetic::crawl_followups(url, followups));
                info!(%url, status = page.status, pages = pages.len(), "Crawled page");
                Sourced::live(pages)
            }
            Err(e) => {
                warn!(%url, error = %e, "Crawl fetch failed, returning synthetic page");
                Sourced::synthetic(vec![synthetic::crawl_page(url)])
            }
        }
    }

    /// Ranked results for `keyword`.
    ///
    /// Credentials passed with the request win over stored ones. Without
    /// credentials, or when the live provider fails, synthetic results are
    /// returned.
    pub async fn serp(
        &self,
        keyword: &str,
        count: usize,
        location: Option<String>,
        request_credentials: Option<GoogleCredentials>,
    ) -> Sourced<Vec<SerpResult>> {
        let credentials = match request_credentials {
            Some(credentials) => Some(credentials),
            None => self.credentials.google().await,
        };

        let mut query = SerpQuery {
            keyword: keyword.to_owned(),
            count,
            location,
            credentials,
        };

        if query.credentials.is_some() {
            match self.live_serp.search(&query).await {
                Ok(results) => return Sourced::live(results),
                Err(e) => warn!(
                    provider = self.live_serp.name(),
                    %keyword,
                    error = %e,
                    "SERP provider failed, using synthetic results"
                ),
            }
        }

        query.credentials = None;
        match self.fallback_serp.search(&query).await {
            Ok(results) => Sourced::synthetic(results),
            Err(e) => {
                warn!(
                    provider = self.fallback_serp.name(),
                    %keyword,
                    error = %e,
                    "Fallback SERP provider failed"
                );
                Sourced::synthetic(Vec::new())
            }
        }
    }

    /// Parses the sitemap at `url`, or a synthetic one for its host.
    pub async fn sitemap(&self, url: &Url) -> Sourced<Vec<SitemapEntry>> {
        match self.fetcher.fetch(url).await {
            Ok(page) => Sourced::live(parse_sitemap(&page.body)),
            Err(e) => {
                warn!(%url, error = %e, "Sitemap fetch failed, returning synthetic sitemap");
                Sourced::synthetic(synthetic::sitemap(url))
            }
        }
    }

    /// Parses robots.txt at the origin of `url`.
    pub async fn robots(&self, url: &Url) -> Sourced<Vec<RobotsRule>> {
        let robots = robots_url(url);
        match self.fetcher.fetch(&robots).await {
            Ok(page) => Sourced::live(parse_robots(&page.body)),
            Err(e) => {
                warn!(url = %robots, error = %e, "robots.txt fetch failed, returning synthetic rules");
                Sourced::synthetic(synthetic::robots(url))
            }
        }
    }
}
