//! Geographic point in WGS84 degrees.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A WGS84 latitude/longitude pair.
///
/// Decoding only ever produces a whole point; there is no partially valid
/// `GeoPoint`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Degrees north of the equator (Y).
    pub latitude: f64,
    /// Degrees east of Greenwich (X).
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both coordinates lie within the WGS84 range.
    pub fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Parses `"latitude,longitude"`.
impl FromStr for GeoPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| Error::invalid_coordinate(format!("expected 'lat,lon', got '{s}'")))?;

        let latitude: f64 = lat
            .trim()
            .parse()
            .map_err(|_| Error::invalid_coordinate(format!("bad latitude '{lat}'")))?;
        let longitude: f64 = lon
            .trim()
            .parse()
            .map_err(|_| Error::invalid_coordinate(format!("bad longitude '{lon}'")))?;

        let point = Self::new(latitude, longitude);
        if !point.is_in_range() {
            return Err(Error::OutOfRange {
                latitude,
                longitude,
            });
        }
        Ok(point)
    }
}
