//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup (after `.env` has been read by
//! `dotenvy`) and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory served at `/static` (default: `static`)
//! - `FETCH_TIMEOUT_SECS` - Crawl, sitemap and robots.txt fetches (default: 10, 1..=120)
//! - `VALIDATE_TIMEOUT_SECS` - URL validation probes (default: 5, 1..=120)
//! - `RATE_LIMIT_PER_SECOND` - Seconds between token refills on `/api` (default: 2)
//! - `RATE_LIMIT_BURST` - Bucket size on `/api` (default: 100)
//!
//! ## Credential Seeds
//!
//! `GOOGLE_SEARCH_API_KEY`, `GOOGLE_SEARCH_CX`, `TWITTER_BEARER_TOKEN`,
//! `YOUTUBE_API_KEY` and `KNOWLEDGE_GRAPH_API_KEY` pre-fill the in-memory
//! credential store. They can be changed at runtime through
//! `/api/config/keys`.

use anyhow::Result;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::credentials::CredentialKey;

const MAX_TIMEOUT_SECS: u64 = 120;

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub static_dir: String,
    pub fetch_timeout_secs: u64,
    pub validate_timeout_secs: u64,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    /// Non-blank credential values found in the environment.
    pub credential_seeds: Vec<(CredentialKey, String)>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numbers fall back to their defaults; range checks happen
    /// in [`Config::validate`].
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let credential_seeds = CredentialKey::ALL
            .into_iter()
            .filter_map(|key| {
                let value = env::var(key.env_var()).ok()?;
                let value = value.trim();
                (!value.is_empty()).then(|| (key, value.to_owned()))
            })
            .collect();

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            static_dir,
            fetch_timeout_secs: env_or("FETCH_TIMEOUT_SECS", 10),
            validate_timeout_secs: env_or("VALIDATE_TIMEOUT_SECS", 5),
            rate_limit_per_second: env_or("RATE_LIMIT_PER_SECOND", 2),
            rate_limit_burst: env_or("RATE_LIMIT_BURST", 100),
            credential_seeds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - a timeout is outside `1..=120` seconds
    /// - a rate limit value is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        for (name, value) in [
            ("FETCH_TIMEOUT_SECS", self.fetch_timeout_secs),
            ("VALIDATE_TIMEOUT_SECS", self.validate_timeout_secs),
        ] {
            if !(1..=MAX_TIMEOUT_SECS).contains(&value) {
                anyhow::bail!("{name} must be between 1 and {MAX_TIMEOUT_SECS}, got {value}");
            }
        }

        if self.rate_limit_per_second == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND must be greater than 0");
        }
        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
        }

        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn validate_timeout(&self) -> Duration {
        Duration::from_secs(self.validate_timeout_secs)
    }

    /// `RATE_LIMIT_PER_SECOND` is the refill interval, not a rate.
    fn rate_limit_summary(&self) -> String {
        format!(
            "1 request every {}s per IP, burst {}",
            self.rate_limit_per_second, self.rate_limit_burst
        )
    }

    /// Logs the configuration. Credential values are masked.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!(
            "  Timeouts: fetch {}s, validate {}s",
            self.fetch_timeout_secs,
            self.validate_timeout_secs
        );
        tracing::info!("  Rate limit: {}", self.rate_limit_summary());

        if self.credential_seeds.is_empty() {
            tracing::info!("  Credentials: none (synthetic SERP results)");
        }
        for (key, value) in &self.credential_seeds {
            tracing::info!("  {}: {}", key.env_var(), mask_secret(value));
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let seeds: Vec<_> = self
            .credential_seeds
            .iter()
            .map(|(key, value)| (key.as_str(), mask_secret(value)))
            .collect();

        f.debug_struct("Config")
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("static_dir", &self.static_dir)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("validate_timeout_secs", &self.validate_timeout_secs)
            .field("rate_limit_per_second", &self.rate_limit_per_second)
            .field("rate_limit_burst", &self.rate_limit_burst)
            .field("credential_seeds", &seeds)
            .finish()
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Keeps the first four characters of long secrets, hides the rest.
///
/// - `AIzaSyD-example` → `AIza***`
/// - `short` → `***`
fn mask_secret(value: &str) -> String {
    if value.chars().count() <= 8 {
        return "***".to_string();
    }
    let prefix: String = value.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
