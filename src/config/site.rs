//! `[site]` section configuration.
//!
//! Contains the site identity used to fill metadata defaults: name,
//! description, Open Graph locale, and base URL.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in site.toml - site identity.
///
/// # Example
/// ```toml
/// [site]
/// name = "Mi Sitio Optimizado"
/// description = "Aprende sobre optimización SEO y rendimiento web"
/// locale = "es_ES"
/// url = "https://example.com"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Site name, used as the default page title and `og:site_name`.
    #[serde(default = "defaults::site::name")]
    #[educe(Default = defaults::site::name())]
    pub name: String,

    /// Fallback description for pages that don't supply one.
    #[serde(default = "defaults::site::description")]
    #[educe(Default = defaults::site::description())]
    pub description: String,

    /// Default `og:locale` tag (e.g., "es_ES", "en_US").
    #[serde(default = "defaults::site::locale")]
    #[educe(Default = defaults::site::locale())]
    pub locale: String,

    /// Base URL for absolute links in metadata and sitemaps.
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: String,
}
