//! Great-circle distance and bounding boxes for radius search.

use std::f64::consts::FRAC_PI_2;

use crate::GeoPoint;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude/longitude rectangle enclosing a search circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// South-west corner.
    pub min: GeoPoint,
    /// North-east corner.
    pub max: GeoPoint,
}

impl BoundingBox {
    /// Whether a point lies inside the box (edges inclusive).
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.min.latitude..=self.max.latitude).contains(&point.latitude)
            && (self.min.longitude..=self.max.longitude).contains(&point.longitude)
    }
}

/// Haversine distance between two points in kilometres.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Box enclosing every point within `radius_km` of `center`.
///
/// Used as a cheap pre-filter before computing exact distances. The box is
/// not wrapped at the antimeridian and latitudes are clamped to the poles.
/// A circle that reaches a pole covers every longitude.
pub fn bounding_box(center: GeoPoint, radius_km: f64) -> BoundingBox {
    let lat = center.latitude.to_radians();
    let lon = center.longitude.to_radians();
    let angular = radius_km / EARTH_RADIUS_KM;

    let min_lat = lat - angular;
    let max_lat = lat + angular;

    let (min_lon, max_lon) = if max_lat >= FRAC_PI_2 || min_lat <= -FRAC_PI_2 {
        (-180.0, 180.0)
    } else {
        // Longitude spread widens with latitude
        let lon_delta = angular / lat.cos();
        ((lon - lon_delta).to_degrees(), (lon + lon_delta).to_degrees())
    };

    BoundingBox {
        min: GeoPoint::new(min_lat.to_degrees().max(-90.0), min_lon),
        max: GeoPoint::new(max_lat.to_degrees().min(90.0), max_lon),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance() {
        let p = GeoPoint::new(30.7333, 76.7794);
        assert!(haversine_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_known_distance() {
        // Chandigarh to New Delhi is roughly 238 km as the crow flies
        let chandigarh = GeoPoint::new(30.7333, 76.7794);
        let delhi = GeoPoint::new(28.6139, 77.2090);
        let d = haversine_km(chandigarh, delhi);
        assert!((230.0..245.0).contains(&d), "got {d}");
    }

    #[test]
    fn test_symmetric() {
        let a = GeoPoint::new(37.7749, -122.4194);
        let b = GeoPoint::new(34.0522, -118.2437);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_one_degree_latitude() {
        let d = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.01, "got {d}");
    }

    #[test]
    fn test_bounding_box_contains_circle() {
        let center = GeoPoint::new(30.7333, 76.7794);
        let bbox = bounding_box(center, 10.0);

        assert!(bbox.contains(center));
        assert!(bbox.min.latitude < center.latitude && center.latitude < bbox.max.latitude);
        assert!(bbox.min.longitude < center.longitude && center.longitude < bbox.max.longitude);

        // A point 5 km north is inside, 50 km north is not
        assert!(bbox.contains(GeoPoint::new(center.latitude + 0.045, center.longitude)));
        assert!(!bbox.contains(GeoPoint::new(center.latitude + 0.45, center.longitude)));
    }

    #[test]
    fn test_bounding_box_clamps_poles() {
        let bbox = bounding_box(GeoPoint::new(89.99, 0.0), 50.0);
        assert_eq!(bbox.max.latitude, 90.0);
    }

    #[test]
    fn test_bounding_box_over_pole_spans_all_longitudes() {
        let center = GeoPoint::new(89.5, 0.0);
        let bbox = bounding_box(center, 100.0);
        assert_eq!(bbox.min.longitude, -180.0);
        assert_eq!(bbox.max.longitude, 180.0);

        // Across the pole, 78 km away
        let across = GeoPoint::new(89.8, 180.0);
        assert!(haversine_km(center, across) < 100.0);
        assert!(bbox.contains(across));

        let south = bounding_box(GeoPoint::new(-89.9, 45.0), 20.0);
        assert_eq!(south.min.latitude, -90.0);
        assert_eq!(south.min.longitude, -180.0);
        assert_eq!(south.max.longitude, 180.0);
    }

    #[test]
    fn test_bounding_box_near_pole_without_crossing() {
        // 1 degree of latitude is about 111 km, so a 50 km circle stays clear
        let bbox = bounding_box(GeoPoint::new(88.0, 10.0), 50.0);
        assert!(bbox.max.latitude < 90.0);
        assert!(bbox.min.longitude > -180.0 && bbox.max.longitude < 180.0);
    }
}
