//! Hydration of raw listing rows into render-ready views.
//!
//! Rows arrive with the location as hex EWKB and images as stored paths.
//! A corrupt geometry only drops the map pin of its own listing; the rest of
//! the batch is unaffected.

use anyhow::Result;
use hearth_geo::{wkb, GeoPoint, HeaderValidation};
use hearth_media::{CdnRoot, ImageUrls};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::Config;

/// A listing row as returned by the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: String,
    pub title: String,
    /// Hex EWKB from the geography column, if any.
    #[serde(default)]
    pub location: Option<String>,
    /// Stored image base paths (variant paths are tolerated).
    #[serde(default)]
    pub image_paths: Vec<String>,
    /// Remaining columns, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A listing ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingView {
    pub id: String,
    pub title: String,
    /// Map pin; `None` when the listing has no usable coordinates.
    pub location: Option<GeoPoint>,
    pub images: Vec<ImageUrls>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Turns listing rows into views using one CDN root and decode mode.
#[derive(Debug, Clone)]
pub struct Hydrator {
    cdn: CdnRoot,
    validation: HeaderValidation,
}

impl Hydrator {
    pub fn new(cdn: CdnRoot, validation: HeaderValidation) -> Self {
        Self { cdn, validation }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.cdn_root()?, config.header_validation()))
    }

    pub fn cdn(&self) -> &CdnRoot {
        &self.cdn
    }

    /// Hydrate a single row.
    pub fn hydrate(&self, record: &ListingRecord) -> ListingView {
        let location = wkb::decode_with(record.location.as_deref(), self.validation);
        if location.is_none() && record.location.as_deref().is_some_and(|s| !s.trim().is_empty()) {
            tracing::debug!(listing = %record.id, "Listing rendered without map pin");
        }

        let images = record
            .image_paths
            .iter()
            .map(|path| self.cdn.base_of_url(path.trim()))
            .filter_map(|base| self.cdn.urls_for(base))
            .collect();

        ListingView {
            id: record.id.clone(),
            title: record.title.clone(),
            location,
            images,
            extra: record.extra.clone(),
        }
    }

    /// Hydrate a batch. Never fails; bad rows degrade field by field.
    pub fn hydrate_all(&self, records: &[ListingRecord]) -> Vec<ListingView> {
        let views: Vec<ListingView> = records.iter().map(|r| self.hydrate(r)).collect();
        let pinned = views.iter().filter(|v| v.location.is_some()).count();
        tracing::debug!("Hydrated {} listings, {} with map pins", views.len(), pinned);
        views
    }
}
