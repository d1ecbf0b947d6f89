//! URL validation: structural checks and live status/redirect probes.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::{debug, error};
use url::Url;

use crate::domain::providers::PageFetcher;
use crate::domain::urls::{is_valid_url, parse_http_url};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Reachable when the probe answers 2xx or 3xx.
    #[default]
    Status,
    /// Reports where the URL ends up after redirects.
    Redirect,
    /// Syntax only, no network access.
    Structure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlCheck {
    pub url: String,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UrlCheck {
    fn invalid(url: &str, error: impl Into<String>) -> Self {
        Self {
            url: url.to_owned(),
            is_valid: false,
            status_code: None,
            redirect_url: None,
            error: Some(error.into()),
        }
    }

    fn valid(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            is_valid: true,
            status_code: None,
            redirect_url: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationStatistics {
    pub total_urls: usize,
    pub valid_urls: usize,
    pub invalid_urls: usize,
    /// Histogram of received HTTP status codes.
    pub status_codes: BTreeMap<String, usize>,
    pub validation_type: ValidationMode,
}

impl ValidationStatistics {
    pub fn from_checks(checks: &[UrlCheck], mode: ValidationMode) -> Self {
        let valid_urls = checks.iter().filter(|c| c.is_valid).count();
        let mut status_codes = BTreeMap::new();
        for code in checks.iter().filter_map(|c| c.status_code) {
            *status_codes.entry(code.to_string()).or_insert(0) += 1;
        }

        Self {
            total_urls: checks.len(),
            valid_urls,
            invalid_urls: checks.len() - valid_urls,
            status_codes,
            validation_type: mode,
        }
    }
}

pub struct UrlService {
    fetcher: Arc<dyn PageFetcher>,
}

impl UrlService {
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Checks every URL; results keep input order.
    ///
    /// Probes run concurrently. A probe that fails marks only its own URL
    /// invalid.
    pub async fn validate(&self, urls: &[String], mode: ValidationMode) -> Vec<UrlCheck> {
        let mut checks: Vec<Option<UrlCheck>> = vec![None; urls.len()];
        let mut probes = JoinSet::new();

        for (i, raw) in urls.iter().enumerate() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                checks[i] = Some(UrlCheck::invalid(raw, "URL is empty"));
                continue;
            }
            if !is_valid_url(trimmed) {
                checks[i] = Some(UrlCheck::invalid(raw, "Invalid URL format"));
                continue;
            }
            if mode == ValidationMode::Structure {
                checks[i] = Some(UrlCheck::valid(raw));
                continue;
            }

            let target = match parse_http_url(trimmed) {
                Ok(url) => url,
                Err(e) => {
                    checks[i] = Some(UrlCheck::invalid(raw, e.to_string()));
                    continue;
                }
            };

            let fetcher = Arc::clone(&self.fetcher);
            let raw = raw.clone();
            probes.spawn(async move {
                let check = probe_one(fetcher.as_ref(), &raw, &target, mode).await;
                (i, check)
            });
        }

        while let Some(joined) = probes.join_next().await {
            match joined {
                Ok((i, check)) => checks[i] = Some(check),
                Err(e) => error!(error = %e, "URL probe task failed"),
            }
        }

        checks
            .into_iter()
            .zip(urls)
            .map(|(check, raw)| {
                check.unwrap_or_else(|| UrlCheck::invalid(raw, "Validation failed"))
            })
            .collect()
    }
}

async fn probe_one(
    fetcher: &dyn PageFetcher,
    raw: &str,
    target: &Url,
    mode: ValidationMode,
) -> UrlCheck {
    match fetcher.probe(target).await {
        Ok(probe) => {
            debug!(url = %target, status = probe.status, "Probed URL");
            let mut check = UrlCheck::valid(raw);
            check.status_code = Some(probe.status);
            match mode {
                ValidationMode::Redirect => {
                    let redirected = Url::parse(&probe.final_url).map_or(true, |f| &f != target);
                    if redirected {
                        check.redirect_url = Some(probe.final_url);
                    }
                }
                _ => check.is_valid = probe.is_reachable(),
            }
            check
        }
        Err(e) => UrlCheck::invalid(raw, e.to_string()),
    }
}
