//! URL construction and sanitization.
//!
//! Absolute URLs are built by joining the configured base URL with a
//! site-relative path. Joining always inserts exactly one slash between
//! base and path, whatever mix of trailing/leading slashes the inputs
//! carry.

use crate::config::SiteConfig;
use std::fmt;
use url::Url;

/// Absolute URL for an Open Graph / social-preview image.
///
/// `og_image_url(config, "blog")` and `og_image_url(config, "/blog")`
/// both yield `"<base>/blog"`.
pub fn og_image_url(config: &SiteConfig, path: &str) -> String {
    join_base(config.base_url(), path)
}

/// Canonical URL for a page, used in `<link rel="canonical">`.
///
/// Same joining contract as [`og_image_url`]; kept separate because
/// the two link kinds may diverge (e.g., a dedicated image CDN host).
pub fn canonical_url(config: &SiteConfig, path: &str) -> String {
    join_base(config.base_url(), path)
}

/// Join a base URL and a site-relative path with exactly one slash.
fn join_base(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

// ============================================================================
// Sanitization
// ============================================================================

/// Outcome of [`sanitize_url`].
///
/// Both variants hold a usable absolute URL string; the variant records
/// whether the input parsed or the configured base URL was substituted.
/// Sitemap builders use [`fell_back`](Self::fell_back) to tell a
/// malformed entry from a legitimate link to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanitizedUrl {
    /// Input parsed; holds its canonical serialization.
    Valid(String),
    /// Input did not parse; holds the configured base URL unchanged.
    Fallback(String),
}

impl SanitizedUrl {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Valid(url) | Self::Fallback(url) => url,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Valid(url) | Self::Fallback(url) => url,
        }
    }

    /// Whether the base URL was substituted for an unparsable input.
    pub fn fell_back(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

impl fmt::Display for SanitizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for SanitizedUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Parse `url` as an absolute URL and return its canonical string form
/// (default port stripped, host lowercased, per the parser's rules).
///
/// Unparsable input yields the configured base URL, tagged as
/// [`SanitizedUrl::Fallback`].
pub fn sanitize_url(config: &SiteConfig, url: &str) -> SanitizedUrl {
    match Url::parse(url) {
        Ok(parsed) => SanitizedUrl::Valid(parsed.to_string()),
        Err(err) => {
            log::warn!("invalid url `{url}` ({err}), substituting site base");
            SanitizedUrl::Fallback(config.base_url().to_string())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_url(url: &str) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.url = url.into();
        config
    }

    #[test]
    fn test_og_image_url_leading_slash_normalized() {
        let config = SiteConfig::default();

        assert_eq!(og_image_url(&config, "blog"), "http://localhost:3000/blog");
        assert_eq!(og_image_url(&config, "/blog"), "http://localhost:3000/blog");
    }

    #[test]
    fn test_canonical_url_same_contract() {
        let config = config_with_url("https://example.com");

        assert_eq!(
            canonical_url(&config, "contacto"),
            "https://example.com/contacto"
        );
        assert_eq!(
            canonical_url(&config, "/contacto"),
            "https://example.com/contacto"
        );
    }

    #[test]
    fn test_join_tolerates_trailing_slash_on_base() {
        let config = config_with_url("https://example.com/");

        assert_eq!(og_image_url(&config, "/og.png"), "https://example.com/og.png");
    }

    #[test]
    fn test_join_collapses_repeated_leading_slashes() {
        let config = config_with_url("https://example.com");

        assert_eq!(canonical_url(&config, "//blog"), "https://example.com/blog");
    }

    #[test]
    fn test_join_empty_path_yields_root() {
        let config = config_with_url("https://example.com");

        assert_eq!(canonical_url(&config, ""), "https://example.com/");
    }

    #[test]
    fn test_sanitize_url_valid_passthrough() {
        let config = SiteConfig::default();
        let sanitized = sanitize_url(&config, "https://example.com/a/");

        assert!(!sanitized.fell_back());
        assert_eq!(sanitized.as_str(), "https://example.com/a/");
    }

    #[test]
    fn test_sanitize_url_normalizes() {
        let config = SiteConfig::default();

        // Default port stripped by the parser.
        let sanitized = sanitize_url(&config, "https://example.com:443/a");
        assert_eq!(sanitized.as_str(), "https://example.com/a");

        // Host lowercased.
        let sanitized = sanitize_url(&config, "https://EXAMPLE.com/A");
        assert_eq!(sanitized.as_str(), "https://example.com/A");
    }

    #[test]
    fn test_sanitize_url_fallback_is_base_unchanged() {
        let config = config_with_url("https://example.com");
        let sanitized = sanitize_url(&config, "not a url");

        assert!(sanitized.fell_back());
        assert_eq!(sanitized.as_str(), "https://example.com");
        assert_eq!(sanitized.to_string(), "https://example.com");
    }

    #[test]
    fn test_sanitize_url_relative_falls_back() {
        // Relative references are not absolute URLs.
        let config = SiteConfig::default();
        let sanitized = sanitize_url(&config, "/blog/post");

        assert!(sanitized.fell_back());
        assert_eq!(sanitized.as_str(), "http://localhost:3000");
    }

    #[test]
    fn test_sanitized_url_into_string() {
        let config = SiteConfig::default();

        assert_eq!(
            sanitize_url(&config, "https://example.com/x").into_string(),
            "https://example.com/x"
        );
    }
}
