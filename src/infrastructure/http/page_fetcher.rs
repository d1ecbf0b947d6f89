//! reqwest-backed [`PageFetcher`].

use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, redirect};
use tracing::debug;
use url::{Host, Url};

use crate::domain::providers::{FetchError, FetchedPage, PageFetcher, Probe};

pub const USER_AGENT: &str = concat!("adtools-web/", env!("CARGO_PKG_VERSION"));

/// Largest page body read into memory.
pub const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

const MAX_REDIRECTS: usize = 10;

/// Fetches pages with one shared connection pool.
///
/// Page fetches (crawl, sitemap, robots) and validation probes carry
/// separate per-request timeouts. Only public hosts are contacted, including
/// redirect targets.
#[derive(Clone)]
pub struct HttpPageFetcher {
    client: Client,
    fetch_timeout: Duration,
    probe_timeout: Duration,
}

impl HttpPageFetcher {
    /// Builds the HTTP client.
    ///
    /// # Errors
    ///
    /// Fails only if the TLS backend cannot be initialized.
    pub fn new(fetch_timeout: Duration, probe_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(redirect::Policy::custom(|attempt| {
                if attempt.previous().len() >= MAX_REDIRECTS {
                    attempt.error("too many redirects")
                } else if ensure_public(attempt.url()).is_err() {
                    attempt.stop()
                } else {
                    attempt.follow()
                }
            }))
            .build()?;

        Ok(Self {
            client,
            fetch_timeout,
            probe_timeout,
        })
    }

    /// The underlying client, shared with other outbound integrations.
    pub fn client(&self) -> Client {
        self.client.clone()
    }
}

fn map_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if err.is_connect() {
        FetchError::Connect(err.to_string())
    } else {
        FetchError::Request(err.to_string())
    }
}

fn is_public_v4(ip: Ipv4Addr) -> bool {
    !(ip.is_loopback()
        || ip.is_private()
        || ip.is_link_local()
        || ip.is_unspecified()
        || ip.is_broadcast()
        || ip.is_documentation())
}

fn is_public_v6(ip: Ipv6Addr) -> bool {
    if let Some(mapped) = ip.to_ipv4_mapped() {
        return is_public_v4(mapped);
    }
    let first = ip.segments()[0];
    let unique_local = first & 0xfe00 == 0xfc00;
    let link_local = first & 0xffc0 == 0xfe80;
    !(ip.is_loopback() || ip.is_unspecified() || unique_local || link_local)
}

/// Rejects loopback, private and link-local targets.
///
/// Only literal addresses and `localhost` names are recognized; names are
/// not resolved here.
fn ensure_public(url: &Url) -> Result<(), FetchError> {
    let public = match url.host() {
        Some(Host::Domain(name)) => {
            let name = name.trim_end_matches('.').to_ascii_lowercase();
            name != "localhost" && !name.ends_with(".localhost")
        }
        Some(Host::Ipv4(ip)) => is_public_v4(ip),
        Some(Host::Ipv6(ip)) => is_public_v6(ip),
        None => false,
    };

    if public {
        Ok(())
    } else {
        Err(FetchError::Blocked(
            url.host_str().unwrap_or_default().to_owned(),
        ))
    }
}

/// Reads the body, giving up once it grows past `limit` bytes.
async fn read_capped(mut response: Response, limit: usize) -> Result<String, FetchError> {
    if response
        .content_length()
        .is_some_and(|len| len > limit as u64)
    {
        return Err(FetchError::TooLarge(limit));
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(map_error)? {
        if body.len() + chunk.len() > limit {
            return Err(FetchError::TooLarge(limit));
        }
        body.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&body).into_owned())
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        ensure_public(url)?;

        let response = self
            .client
            .get(url.clone())
            .timeout(self.fetch_timeout)
            .send()
            .await
            .map_err(map_error)?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = read_capped(response, MAX_BODY_BYTES).await?;

        debug!(%url, status, bytes = body.len(), "Fetched page");

        Ok(FetchedPage {
            status,
            final_url,
            body,
        })
    }

    async fn probe(&self, url: &Url) -> Result<Probe, FetchError> {
        ensure_public(url)?;

        let response = self
            .client
            .get(url.clone())
            .timeout(self.probe_timeout)
            .send()
            .await
            .map_err(map_error)?;

        Ok(Probe {
            status: response.status().as_u16(),
            final_url: response.url().to_string(),
        })
    }
}
