//! Registry configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any service
//! is constructed.
//!
//! ```bash
//! export PLATFORM_BASE_URLS="facebook=https://track.fb.test,google=https://track.goog.test"
//! export FALLBACK_BASE_URL="https://track.campaigns.test"
//! export LINK_RETENTION="retain"
//! ```
//!
//! ## Optional Variables
//!
//! All variables have defaults; nothing is required.
//!
//! - `PLATFORM_BASE_URLS` - comma-separated `platform=base-url` pairs that
//!   override or extend the built-in catalog
//! - `FALLBACK_BASE_URL` - base URL used for platforms without a catalog entry
//!   (default: `https://track.campaigns.test`)
//! - `LINK_RETENTION` - `retain` or `prune`: what happens to stored tracking
//!   links whose product drops out of a reassignment (default: `retain`)

use std::collections::HashMap;
use std::env;

use anyhow::{Context, Result};
use url::Url;

use crate::domain::entities::LinkRetention;

/// Base URL used for platforms the catalog does not know.
const DEFAULT_FALLBACK_BASE: &str = "https://track.campaigns.test";

/// Maps advertising platforms to the base URL tracking links are minted under.
///
/// Lookups are case-insensitive and ignore surrounding whitespace, so the
/// platform label stored on a campaign can be used as-is.
#[derive(Debug, Clone)]
pub struct PlatformCatalog {
    entries: HashMap<String, String>,
    fallback_base: String,
}

impl PlatformCatalog {
    /// Adds or replaces a platform entry. Keys are stored lowercased.
    pub fn with_platform(mut self, platform: &str, base_url: &str) -> Self {
        self.entries
            .insert(platform.trim().to_ascii_lowercase(), base_url.to_string());
        self
    }

    /// Replaces the fallback base URL used for unknown platforms.
    pub fn with_fallback(mut self, base_url: &str) -> Self {
        self.fallback_base = base_url.to_string();
        self
    }

    /// Resolves the base URL for a platform.
    ///
    /// Unknown platforms fall back to `<fallback_base>/<platform-slug>`, where
    /// the slug is the lowercased label with whitespace replaced by dashes.
    pub fn base_url(&self, platform: &str) -> String {
        let key = platform.trim().to_ascii_lowercase();
        if let Some(base_url) = self.entries.get(&key) {
            return base_url.clone();
        }

        let slug = key.replace(char::is_whitespace, "-");
        format!("{}/{}", self.fallback_base.trim_end_matches('/'), slug)
    }
}

impl Default for PlatformCatalog {
    fn default() -> Self {
        let mut entries = HashMap::new();
        for (platform, base_url) in [
            ("facebook", "https://track.fb.test"),
            ("google", "https://track.goog.test"),
            ("instagram", "https://track.ig.test"),
            ("tiktok", "https://track.tt.test"),
        ] {
            entries.insert(platform.to_string(), base_url.to_string());
        }

        Self {
            entries,
            fallback_base: DEFAULT_FALLBACK_BASE.to_string(),
        }
    }
}

/// Registry configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Platform base URLs used when minting tracking links.
    pub platforms: PlatformCatalog,
    /// Policy applied to stored links when their product drops out of an
    /// assignment.
    pub link_retention: LinkRetention,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PLATFORM_BASE_URLS` or `LINK_RETENTION` is set
    /// but malformed.
    pub fn from_env() -> Result<Self> {
        let mut platforms = PlatformCatalog::default();

        if let Ok(raw) = env::var("PLATFORM_BASE_URLS") {
            for (platform, base_url) in
                parse_platform_overrides(&raw).context("Failed to parse PLATFORM_BASE_URLS")?
            {
                platforms = platforms.with_platform(&platform, &base_url);
            }
        }

        if let Ok(fallback) = env::var("FALLBACK_BASE_URL") {
            platforms = platforms.with_fallback(&fallback);
        }

        let link_retention = match env::var("LINK_RETENTION") {
            Ok(raw) => raw
                .parse::<LinkRetention>()
                .map_err(anyhow::Error::msg)
                .context("Failed to parse LINK_RETENTION")?,
            Err(_) => LinkRetention::default(),
        };

        Ok(Self {
            platforms,
            link_retention,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any catalog entry or the fallback is not an
    /// `http`/`https` URL.
    pub fn validate(&self) -> Result<()> {
        for (platform, base_url) in &self.platforms.entries {
            validate_base_url(base_url)
                .with_context(|| format!("Invalid base URL for platform '{platform}'"))?;
        }

        validate_base_url(&self.platforms.fallback_base).context("Invalid FALLBACK_BASE_URL")?;

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Known platforms: {}", self.platforms.entries.len());
        tracing::info!("  Fallback base URL: {}", self.platforms.fallback_base);
        tracing::info!("  Link retention: {:?}", self.link_retention);
    }
}

/// Parses the `platform=base-url` pairs of `PLATFORM_BASE_URLS`.
///
/// Empty segments are skipped so trailing commas are harmless.
fn parse_platform_overrides(raw: &str) -> Result<Vec<(String, String)>> {
    let mut overrides = Vec::new();

    for pair in raw.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }

        let (platform, base_url) = pair
            .split_once('=')
            .with_context(|| format!("Expected 'platform=base-url', got '{pair}'"))?;
        overrides.push((platform.trim().to_string(), base_url.trim().to_string()));
    }

    Ok(overrides)
}

fn validate_base_url(base_url: &str) -> Result<()> {
    let url = Url::parse(base_url).with_context(|| format!("'{base_url}' is not a valid URL"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("'{base_url}' must use http or https, got '{}'", url.scheme());
    }

    Ok(())
}

/// Loads and validates configuration from environment variables.
///
/// Reads a local `.env` file first when one is present.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
pub fn load_from_env() -> Result<Config> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
