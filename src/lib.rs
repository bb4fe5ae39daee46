//! Sitemeta - SEO metadata building for marketing sites.
//!
//! Produces normalized metadata records (title, description, keywords,
//! Open Graph, Twitter Card, robots directives) from partial per-page
//! descriptions, merges site-wide defaults with page overrides, and
//! serializes sitemaps.
//!
//! All operations are pure functions of their inputs; site-wide
//! constants (base URL, site name, locale) are threaded in explicitly
//! via [`SiteConfig`] rather than read from ambient global state.
//!
//! # Example
//!
//! ```
//! use sitemeta::{build, PageMetadata, SiteConfig};
//!
//! let config = SiteConfig::default();
//! let meta = build(&config, PageMetadata {
//!     title: Some("Blog".into()),
//!     ..Default::default()
//! });
//!
//! assert_eq!(meta.title, "Blog");
//! assert_eq!(meta.description, config.site.description);
//! ```

pub mod config;
pub mod generator;
pub mod metadata;
pub mod utils;

pub use config::{ConfigError, SiteConfig};
pub use generator::sitemap::{ChangeFrequency, Sitemap, SitemapEntry};
pub use metadata::{
    Metadata, MetadataError, OgImage, OgKind, OgMeta, OpenGraph, PageMetadata, Robots, RobotsMeta,
    TwitterCard, TwitterCardKind, build, merge,
};
pub use utils::url::{SanitizedUrl, canonical_url, og_image_url, sanitize_url};
