//! Hearth-Geo: Listing coordinates from PostGIS geography columns.
//!
//! Spatial columns come back from the database as hex-encoded EWKB. This
//! crate turns those strings into a [`GeoPoint`] and back, and provides the
//! distance math used for radius search.
//!
//! # Modules
//!
//! - `point` - The `GeoPoint` value type
//! - `wkb` - EWKB point decoding and encoding
//! - `distance` - Haversine distance and bounding boxes
//!
//! # Example
//!
//! ```
//! use hearth_geo::wkb;
//!
//! let point = wkb::decode(Some("0101000020E610000027A089B0E131534024287E8CB9BB3E40"))
//!     .expect("valid point");
//! assert!((point.latitude - 30.7333).abs() < 1e-9);
//! assert!((point.longitude - 76.7794).abs() < 1e-9);
//!
//! // Absent or corrupt geometry is not an error.
//! assert!(wkb::decode(None).is_none());
//! assert!(wkb::decode(Some("not-hex")).is_none());
//! ```

pub mod distance;
pub mod error;
pub mod point;
pub mod wkb;

pub use error::{Error, Result};
pub use point::GeoPoint;
pub use wkb::HeaderValidation;
