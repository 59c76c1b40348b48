//! Hearth-Media: Listing image variants and CDN URLs.
//!
//! Every uploaded listing photo is stored once under a canonical base path
//! (`<collection>/<slug>/img-<token>`). An external resize step writes one
//! object per [`ImageVariant`] next to it:
//!
//! ```text
//! properties/sunny-villa/img-3f9a1c0d2b4e-original.jpg
//! properties/sunny-villa/img-3f9a1c0d2b4e-thumbnail.webp
//! properties/sunny-villa/img-3f9a1c0d2b4e-card.webp
//! properties/sunny-villa/img-3f9a1c0d2b4e-hero.webp
//! ```
//!
//! This crate derives those names and their CDN URLs, and recovers the base
//! path from any variant path.
//!
//! # Example
//!
//! ```
//! use hearth_media::{base_of, CdnRoot, ImageVariant};
//!
//! let cdn = CdnRoot::new("cdn.example.com").unwrap();
//! let url = cdn.url_for("properties/x/img-1", ImageVariant::Card);
//! assert_eq!(url, "https://cdn.example.com/properties/x/img-1-card.webp");
//! assert_eq!(base_of("properties/x/img-1-card.webp"), "properties/x/img-1");
//! ```

pub mod base_path;
pub mod cdn;
pub mod error;
pub mod variant;

pub use base_path::ImageBasePath;
pub use cdn::{base_of, CdnRoot, ImageUrls};
pub use error::{Error, Result};
pub use variant::ImageVariant;
