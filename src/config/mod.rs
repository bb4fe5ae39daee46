//! Site configuration management for `site.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                        |
//! |-----------|------------------------------------------------|
//! | `[site]`  | Site identity (name, description, locale, url) |
//! | `[extra]` | User-defined custom fields                     |
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "Mi Sitio Optimizado"
//! description = "Aprende sobre optimización SEO y rendimiento web"
//! locale = "es_ES"
//! url = "https://example.com"
//!
//! [extra]
//! analytics_id = "UA-12345"
//! ```
//!
//! The configuration is an explicit value threaded into every builder
//! operation. Nothing here is read lazily or cached process-wide, so
//! tests may run with any number of configurations in parallel.

pub mod defaults;
mod error;
mod site;

pub use error::ConfigError;
pub use site::SiteSection;

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, env, fs, path::Path};
use url::Url;

/// Environment variable overriding `[site.url]`.
///
/// Kept byte-compatible with the hosting environment this site is
/// deployed to, so the same variable configures both the renderer and
/// this crate.
pub const SITE_URL_ENV: &str = "NEXT_PUBLIC_SITE_URL";

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity used for metadata defaults and URL construction
    #[serde(default)]
    pub site: SiteSection,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Build a configuration from defaults plus the environment.
    ///
    /// Reads [`SITE_URL_ENV`] for the base URL; all other fields keep
    /// their defaults. An unset or empty variable falls back to
    /// `http://localhost:3000`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        match env::var(SITE_URL_ENV) {
            Ok(url) if !url.is_empty() => config.site.url = url,
            _ => log::debug!("{SITE_URL_ENV} not set, using {}", config.site.url),
        }
        config
    }

    /// Base URL for absolute links in metadata and sitemaps
    pub fn base_url(&self) -> &str {
        &self.site.url
    }

    /// Validate configuration.
    ///
    /// `[site.url]` must parse as an absolute URL with an `http` or
    /// `https` scheme and a host.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = &self.site.url;
        let parsed = Url::parse(base).map_err(|err| {
            ConfigError::Validation(format!("[site.url] `{base}` is not a valid URL: {err}"))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "[site.url] scheme `{}` not supported, must be http or https",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            return Err(ConfigError::Validation(
                "[site.url] must have a valid host".into(),
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
