//! Metadata record types.
//!
//! Two families of types live here:
//!
//! - partial inputs ([`PageMetadata`] and its sections), where every
//!   field a page may omit is optional;
//! - the normalized output ([`Metadata`]), where site-level defaults
//!   have been resolved.
//!
//! All types serialize with the camelCase field names the consuming
//! rendering layer expects in document heads (`openGraph`, `siteName`,
//! `type`), and absent sections are omitted rather than serialized as
//! null.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Partial Input
// ============================================================================

/// Partial SEO/social metadata for one page.
///
/// Every field may be omitted; [`build`](super::build) resolves the
/// defaults.
///
/// | Field        | Default applied by `build`            |
/// |--------------|---------------------------------------|
/// | `title`      | site name                             |
/// | `description`| site description                      |
/// | `keywords`   | empty                                 |
/// | `open_graph` | absent stays absent                   |
/// | `twitter`    | absent stays absent                   |
/// | `robots`     | absent stays absent                   |
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PageMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<Robots>,
}

/// Partial Open Graph section.
///
/// `title`, `description`, `images` and `kind` are display fields the
/// rendering layer needs; they stay optional here because a page-level
/// section may rely on a base section supplying them during merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct OpenGraph {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<OgImage>,

    /// Open Graph object type, serialized as `type`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<OgKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
}

/// Open Graph image descriptor. Only `url` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OgImage {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Open Graph object type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OgKind {
    Website,
    Article,
    Profile,
}

/// Twitter Card section.
///
/// Passes through [`build`](super::build) unchanged, so the same type
/// serves as partial input and normalized output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TwitterCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<TwitterCardKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// Twitter Card preview layout variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCardKind {
    Summary,
    SummaryLargeImage,
}

/// Partial robots directives. Unset flags default to `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Robots {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow: Option<bool>,
}

// ============================================================================
// Normalized Output
// ============================================================================

/// Normalized metadata record for one page.
///
/// Produced by [`build`](super::build); structurally compatible with
/// the head-tag convention of the consuming rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,

    pub description: String,

    pub keywords: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OgMeta>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<RobotsMeta>,
}

/// Normalized Open Graph section: `locale` and `site_name` resolved.
///
/// The display fields stay optional: a section assembled from an
/// incomplete merge propagates their absence instead of failing, and
/// [`Metadata::validate`] reports it on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OgMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<OgImage>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<OgKind>,

    pub locale: String,

    pub site_name: String,
}

/// Normalized robots directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RobotsMeta {
    pub index: bool,
    pub follow: bool,
}

/// Incomplete section reported by [`Metadata::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("openGraph section is missing `{0}`")]
    OpenGraphField(&'static str),

    #[error("twitter section is missing `{0}`")]
    TwitterField(&'static str),
}

impl Metadata {
    /// Check that present Open Graph / Twitter sections carry all their
    /// display fields.
    ///
    /// `build` and `merge` never fail; an incomplete merge leaves
    /// display fields unset in the normalized record. Callers wanting a
    /// loud failure instead of silently sparse head tags run this after
    /// building.
    pub fn validate(&self) -> Result<(), MetadataError> {
        if let Some(og) = &self.open_graph {
            if og.title.is_none() {
                return Err(MetadataError::OpenGraphField("title"));
            }
            if og.description.is_none() {
                return Err(MetadataError::OpenGraphField("description"));
            }
            if og.images.is_empty() {
                return Err(MetadataError::OpenGraphField("images"));
            }
            if og.kind.is_none() {
                return Err(MetadataError::OpenGraphField("type"));
            }
        }

        if let Some(twitter) = &self.twitter {
            if twitter.card.is_none() {
                return Err(MetadataError::TwitterField("card"));
            }
            if twitter.title.is_none() {
                return Err(MetadataError::TwitterField("title"));
            }
            if twitter.description.is_none() {
                return Err(MetadataError::TwitterField("description"));
            }
            if twitter.images.is_empty() {
                return Err(MetadataError::TwitterField("images"));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_metadata_from_toml() {
        let page: PageMetadata = toml::from_str(
            r#"
            title = "Blog"
            keywords = ["seo", "web"]

            [openGraph]
            title = "Blog"
            description = "Articles"
            type = "article"

            [[openGraph.images]]
            url = "https://example.com/og.png"
            width = 1200
            height = 630
        "#,
        )
        .unwrap();

        assert_eq!(page.title.as_deref(), Some("Blog"));
        assert_eq!(page.keywords, vec!["seo", "web"]);

        let og = page.open_graph.unwrap();
        assert_eq!(og.kind, Some(OgKind::Article));
        assert_eq!(og.images.len(), 1);
        assert_eq!(og.images[0].width, Some(1200));
        assert!(og.locale.is_none());
    }

    #[test]
    fn test_page_metadata_rejects_unknown_fields() {
        let result: Result<PageMetadata, _> = toml::from_str("titel = \"typo\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(OgKind::Website).unwrap(), "website");
        assert_eq!(serde_json::to_value(OgKind::Profile).unwrap(), "profile");
        assert_eq!(
            serde_json::to_value(TwitterCardKind::SummaryLargeImage).unwrap(),
            "summary_large_image"
        );
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let meta = Metadata {
            title: "Home".into(),
            description: "Landing page".into(),
            keywords: vec![],
            open_graph: Some(OgMeta {
                title: Some("Home".into()),
                description: Some("Landing page".into()),
                images: vec![OgImage {
                    url: "https://example.com/og.png".into(),
                    ..Default::default()
                }],
                kind: Some(OgKind::Website),
                locale: "es_ES".into(),
                site_name: "Mi Sitio Optimizado".into(),
            }),
            twitter: None,
            robots: Some(RobotsMeta {
                index: true,
                follow: false,
            }),
        };

        let json = serde_json::to_value(&meta).unwrap();

        assert_eq!(json["openGraph"]["siteName"], "Mi Sitio Optimizado");
        assert_eq!(json["openGraph"]["type"], "website");
        assert_eq!(json["openGraph"]["locale"], "es_ES");
        assert_eq!(json["robots"]["follow"], false);
        // Absent sections are omitted entirely, not serialized as null.
        assert!(json.get("twitter").is_none());
        // Keywords are always present, even when empty.
        assert_eq!(json["keywords"], serde_json::json!([]));
    }

    #[test]
    fn test_validate_passes_without_sections() {
        let meta = Metadata {
            title: "Home".into(),
            description: "Landing page".into(),
            keywords: vec![],
            open_graph: None,
            twitter: None,
            robots: None,
        };

        assert!(meta.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_missing_og_fields() {
        let meta = Metadata {
            title: "Home".into(),
            description: "Landing page".into(),
            keywords: vec![],
            open_graph: Some(OgMeta {
                locale: "es_ES".into(),
                site_name: "Mi Sitio Optimizado".into(),
                ..Default::default()
            }),
            twitter: None,
            robots: None,
        };

        assert_eq!(
            meta.validate(),
            Err(MetadataError::OpenGraphField("title"))
        );
    }

    #[test]
    fn test_validate_reports_missing_twitter_card() {
        let meta = Metadata {
            title: "Home".into(),
            description: "Landing page".into(),
            keywords: vec![],
            open_graph: None,
            twitter: Some(TwitterCard {
                title: Some("Home".into()),
                description: Some("Landing page".into()),
                images: vec!["https://example.com/card.png".into()],
                ..Default::default()
            }),
            robots: None,
        };

        assert_eq!(meta.validate(), Err(MetadataError::TwitterField("card")));
    }
}
