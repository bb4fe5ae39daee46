//! Page metadata records and the build/merge operations over them.
//!
//! The flow is one-directional: a partial [`PageMetadata`] (possibly
//! the shallow merge of a site-wide base and a page override) goes
//! through [`build`], which fills defaults from the site configuration
//! and produces a normalized [`Metadata`] record ready for head-tag
//! injection by the consuming rendering layer.
//!
//! ```text
//! PageMetadata (base) ──┐
//!                       ├──► merge() ──► build() ──► Metadata
//! PageMetadata (page) ──┘
//! ```

mod builder;
mod types;

pub use builder::{build, merge};
pub use types::{
    Metadata, MetadataError, OgImage, OgKind, OgMeta, OpenGraph, PageMetadata, Robots, RobotsMeta,
    TwitterCard, TwitterCardKind,
};
