//! Sitemap generation.
//!
//! Serializes a sequence of entries to sitemap markup for search
//! engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.8</priority>
//!   </url>
//! </urlset>
//! ```
//!
//! Entry URLs are passed through
//! [`sanitize_url`](crate::utils::url::sanitize_url): an entry whose
//! URL does not parse is emitted with the site base URL as its
//! location. Entries are written in insertion order, without
//! deduplication.

use crate::{config::SiteConfig, utils::url::sanitize_url};
use anyhow::Result;
use chrono::{DateTime, Utc};
use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Entries
// ============================================================================

/// Single URL entry in the sitemap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SitemapEntry {
    /// Full URL location
    pub url: String,

    /// Last modification time, emitted as `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,

    /// Expected change cadence hint for crawlers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_frequency: Option<ChangeFrequency>,

    /// Crawl priority, conventionally 0.0 to 1.0 (not enforced)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f32>,
}

impl SitemapEntry {
    /// Entry with only a location.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            last_modified: None,
            change_frequency: None,
            priority: None,
        }
    }
}

/// `<changefreq>` values defined by the sitemap protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

// ============================================================================
// Sitemap
// ============================================================================

/// Sitemap builder over a site configuration.
#[derive(Debug)]
pub struct Sitemap<'a> {
    config: &'a SiteConfig,
    entries: Vec<SitemapEntry>,
}

impl<'a> Sitemap<'a> {
    /// Empty sitemap.
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
        }
    }

    /// Sitemap over pre-collected entries.
    pub fn from_entries(config: &'a SiteConfig, entries: Vec<SitemapEntry>) -> Self {
        Self { config, entries }
    }

    pub fn push(&mut self, entry: SitemapEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Generate sitemap XML string.
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", SITEMAP_NS));
        writer.write_event(Event::Start(urlset))?;

        for entry in &self.entries {
            writer.write_event(Event::Start(BytesStart::new("url")))?;

            let loc = sanitize_url(self.config, &entry.url);
            write_text_element(&mut writer, "loc", loc.as_str())?;

            if let Some(lastmod) = &entry.last_modified {
                let ymd = lastmod.format("%Y-%m-%d").to_string();
                write_text_element(&mut writer, "lastmod", &ymd)?;
            }
            if let Some(freq) = entry.change_frequency {
                write_text_element(&mut writer, "changefreq", freq.as_str())?;
            }
            if let Some(priority) = entry.priority {
                write_text_element(&mut writer, "priority", &format!("{priority:.1}"))?;
            }

            writer.write_event(Event::End(BytesEnd::new("url")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("urlset")))?;

        let xml = String::from_utf8(writer.into_inner().into_inner())?;
        Ok(xml)
    }
}

/// Write a text element: `<tag>text</tag>`, escaping the text.
fn write_text_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    tag: &str,
    text: &str,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
