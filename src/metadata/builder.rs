//! Build and merge operations for page metadata.
//!
//! Defaulting rules applied by [`build`]:
//!
//! | Field        | When absent in input                          |
//! |--------------|-----------------------------------------------|
//! | `title`      | `[site.name]`                                 |
//! | `description`| `[site.description]`                          |
//! | `keywords`   | empty list                                    |
//! | `open_graph` | stays absent; when present, only `locale` and |
//! |              | `site_name` are filled from the site config   |
//! | `twitter`    | stays absent; passes through unchanged        |
//! | `robots`     | stays absent; when present, unset flags       |
//! |              | default to `true`                             |

use crate::config::SiteConfig;
use crate::metadata::types::{
    Metadata, OgMeta, OpenGraph, PageMetadata, RobotsMeta, TwitterCard,
};

/// Normalize a partial page description into a complete metadata
/// record, filling defaults from the site configuration.
///
/// Total: never fails. Display fields absent from a present
/// `open_graph` section propagate as `None` rather than erroring; run
/// [`Metadata::validate`] afterwards for a strict check.
pub fn build(config: &SiteConfig, page: PageMetadata) -> Metadata {
    let PageMetadata {
        title,
        description,
        keywords,
        open_graph,
        twitter,
        robots,
    } = page;

    Metadata {
        title: title.unwrap_or_else(|| config.site.name.clone()),
        description: description.unwrap_or_else(|| config.site.description.clone()),
        keywords,
        open_graph: open_graph.map(|og| OgMeta {
            title: og.title,
            description: og.description,
            images: og.images,
            kind: og.kind,
            locale: og.locale.unwrap_or_else(|| config.site.locale.clone()),
            site_name: og.site_name.unwrap_or_else(|| config.site.name.clone()),
        }),
        twitter,
        robots: robots.map(|r| RobotsMeta {
            index: r.index.unwrap_or(true),
            follow: r.follow.unwrap_or(true),
        }),
    }
}

/// Merge a site-wide base record with a page override, then normalize
/// through [`build`].
///
/// - scalar fields: page wins when set;
/// - `keywords`: base then page, concatenated, duplicates kept;
/// - `open_graph` / `twitter`: per-field shallow merge when the page
///   supplies the section, base section verbatim otherwise;
/// - `robots`: a page-supplied section replaces the base section
///   wholesale.
pub fn merge(config: &SiteConfig, base: PageMetadata, page: PageMetadata) -> Metadata {
    let mut keywords = base.keywords;
    keywords.extend(page.keywords);

    let open_graph = match page.open_graph {
        Some(over) => Some(merge_open_graph(base.open_graph, over)),
        None => base.open_graph,
    };
    let twitter = match page.twitter {
        Some(over) => Some(merge_twitter(base.twitter, over)),
        None => base.twitter,
    };

    build(
        config,
        PageMetadata {
            title: page.title.or(base.title),
            description: page.description.or(base.description),
            keywords,
            open_graph,
            twitter,
            robots: page.robots.or(base.robots),
        },
    )
}

/// Per-field shallow merge of Open Graph sections, page wins.
fn merge_open_graph(base: Option<OpenGraph>, over: OpenGraph) -> OpenGraph {
    let Some(base) = base else { return over };

    OpenGraph {
        title: over.title.or(base.title),
        description: over.description.or(base.description),
        images: if over.images.is_empty() {
            base.images
        } else {
            over.images
        },
        kind: over.kind.or(base.kind),
        locale: over.locale.or(base.locale),
        site_name: over.site_name.or(base.site_name),
    }
}

/// Per-field shallow merge of Twitter Card sections, page wins.
fn merge_twitter(base: Option<TwitterCard>, over: TwitterCard) -> TwitterCard {
    let Some(base) = base else { return over };

    TwitterCard {
        card: over.card.or(base.card),
        title: over.title.or(base.title),
        description: over.description.or(base.description),
        images: if over.images.is_empty() {
            base.images
        } else {
            over.images
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
