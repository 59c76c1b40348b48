//! Radius search over hydrated listings.

use hearth_geo::distance::{bounding_box, haversine_km};
use hearth_geo::GeoPoint;
use serde::Serialize;

use crate::listing::ListingView;

/// A listing within the search radius.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit<'a> {
    pub distance_km: f64,
    #[serde(flatten)]
    pub listing: &'a ListingView,
}

/// Listings with a map pin within `radius_km` of `center`, nearest first.
///
/// Listings without a pin never match.
pub fn within_radius(
    views: &[ListingView],
    center: GeoPoint,
    radius_km: f64,
) -> Vec<SearchHit<'_>> {
    let bbox = bounding_box(center, radius_km);
    // The box is not wrapped at the antimeridian; skip the pre-filter there
    let use_bbox = bbox.min.longitude >= -180.0 && bbox.max.longitude <= 180.0;

    let mut hits: Vec<SearchHit<'_>> = views
        .iter()
        .filter_map(|view| {
            let pin = view.location?;
            if use_bbox && !bbox.contains(pin) {
                return None;
            }
            let distance_km = haversine_km(center, pin);
            (distance_km <= radius_km).then_some(SearchHit {
                distance_km,
                listing: view,
            })
        })
        .collect();

    hits.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn view(id: &str, location: Option<GeoPoint>) -> ListingView {
        ListingView {
            id: id.to_string(),
            title: id.to_string(),
            location,
            images: Vec::new(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_filters_and_sorts() {
        let center = GeoPoint::new(30.7333, 76.7794);
        let views = vec![
            view("far", Some(GeoPoint::new(28.6139, 77.2090))),
            view("near", Some(GeoPoint::new(30.74, 76.78))),
            view("nopin", None),
            view("nearer", Some(GeoPoint::new(30.7334, 76.7794))),
        ];

        let hits = within_radius(&views, center, 25.0);
        let ids: Vec<&str> = hits.iter().map(|h| h.listing.id.as_str()).collect();
        assert_eq!(ids, vec!["nearer", "near"]);
        assert!(hits[0].distance_km < hits[1].distance_km);
    }

    #[test]
    fn test_large_radius_includes_far() {
        let center = GeoPoint::new(30.7333, 76.7794);
        let views = vec![view("far", Some(GeoPoint::new(28.6139, 77.2090)))];
        assert_eq!(within_radius(&views, center, 300.0).len(), 1);
    }

    #[test]
    fn test_across_antimeridian() {
        let center = GeoPoint::new(0.0, 179.95);
        let views = vec![view("east", Some(GeoPoint::new(0.0, -179.95)))];
        let hits = within_radius(&views, center, 20.0);
        assert_eq!(hits.len(), 1);
        assert!(hits[0].distance_km < 12.0);
    }

    #[test]
    fn test_across_pole() {
        let center = GeoPoint::new(89.5, 0.0);
        let views = vec![
            view("across", Some(GeoPoint::new(89.8, 180.0))),
            view("too-far", Some(GeoPoint::new(88.0, 180.0))),
        ];
        let hits = within_radius(&views, center, 100.0);
        let ids: Vec<&str> = hits.iter().map(|h| h.listing.id.as_str()).collect();
        assert_eq!(ids, vec!["across"]);
        assert!(hits[0].distance_km < 80.0);
    }
}
