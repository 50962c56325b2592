//! Conversion from backend DTOs to domain types.
//!
//! Entries that fail validation are logged and skipped rather than failing
//! the whole response: one bad station should not hide the overlay.

use tracing::{debug, warn};

use crate::domain::{Charger, GeoBox, GeoPoint, RoutePath, Segment, Station};

use super::types::{BoundsResponse, EvsResponse, PathDto, RouteResponse, StationsResponse};

/// Extract the raw graph extent, if the backend reported a complete one.
pub fn convert_bounds(response: &BoundsResponse) -> Option<GeoBox> {
    let b = response.bounds.as_ref()?;
    let (Some(min_lat), Some(min_lon), Some(max_lat), Some(max_lon)) =
        (b.min_lat, b.min_lon, b.max_lat, b.max_lon)
    else {
        debug!("bounds response is incomplete, treating as unrestricted");
        return None;
    };

    match GeoBox::new(min_lat, min_lon, max_lat, max_lon) {
        Ok(extent) => Some(extent),
        Err(e) => {
            warn!(error = %e, "ignoring invalid bounds from backend");
            None
        }
    }
}

/// Convert the station list, skipping entries without a valid position.
pub fn convert_stations(response: StationsResponse) -> Vec<Station> {
    response
        .stations
        .unwrap_or_default()
        .into_iter()
        .filter_map(|s| {
            let point = point_from(s.lat, s.lon)?;
            Some(Station {
                name: s.name.unwrap_or_default(),
                point,
            })
        })
        .collect()
}

/// Convert the charger list, skipping entries without a valid position.
pub fn convert_chargers(response: EvsResponse) -> Vec<Charger> {
    response
        .evs
        .unwrap_or_default()
        .into_iter()
        .filter_map(|ev| {
            let point = point_from(ev.lat, ev.lon)?;
            Some(Charger {
                kind: ev.kind,
                point,
            })
        })
        .collect()
}

/// Interpret a route answer.
///
/// Returns `None` for every flavour of "no route": missing path, no
/// segments, the `-1` cost sentinel, or no drawable segment left after
/// validation.
pub fn convert_path(response: RouteResponse) -> Option<RoutePath> {
    let PathDto {
        segments,
        total_cost,
        total_distance,
    } = response.path?;

    if segments.is_empty() {
        return None;
    }
    let total_cost = total_cost?;
    if total_cost == -1.0 {
        return None;
    }

    let segments: Vec<Segment> = segments
        .into_iter()
        .enumerate()
        .filter_map(|(idx, dto)| {
            let coords: Result<Vec<GeoPoint>, _> =
                dto.coords.into_iter().map(GeoPoint::try_from).collect();
            match coords.and_then(|coords| Segment::new(dto.mode, coords)) {
                Ok(segment) => Some(segment),
                Err(e) => {
                    debug!(segment = idx, error = %e, "skipping undrawable segment");
                    None
                }
            }
        })
        .collect();

    match RoutePath::new(segments, total_cost, total_distance.unwrap_or(0.0)) {
        Ok(path) => Some(path),
        Err(e) => {
            warn!(error = %e, "route response has no usable path");
            None
        }
    }
}

fn point_from(lat: Option<f64>, lon: Option<f64>) -> Option<GeoPoint> {
    GeoPoint::new(lat?, lon?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SegmentMode;

    fn route(json: &str) -> RouteResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn bounds_complete() {
        let r: BoundsResponse = serde_json::from_str(
            r#"{"bounds": {"min_lat": 17.2, "min_lon": 78.3, "max_lat": 17.6, "max_lon": 78.7}}"#,
        )
        .unwrap();
        let b = convert_bounds(&r).unwrap();
        assert_eq!(b.south(), 17.2);
        assert_eq!(b.east(), 78.7);
    }

    #[test]
    fn bounds_with_nulls_is_unrestricted() {
        let r: BoundsResponse = serde_json::from_str(
            r#"{"bounds": {"min_lat": null, "min_lon": null, "max_lat": null, "max_lon": null}}"#,
        )
        .unwrap();
        assert!(convert_bounds(&r).is_none());
    }

    #[test]
    fn stations_skip_invalid() {
        let r: StationsResponse = serde_json::from_str(
            r#"{"stations": [
                {"lat": 17.43, "lon": 78.50, "name": "Secunderabad"},
                {"lat": null, "lon": 78.50, "name": "Nowhere"},
                {"lat": 123.0, "lon": 78.50, "name": "Off the globe"}
            ]}"#,
        )
        .unwrap();
        let stations = convert_stations(r);
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].name, "Secunderabad");
    }

    #[test]
    fn missing_station_list_is_empty() {
        let r: StationsResponse = serde_json::from_str("{}").unwrap();
        assert!(convert_stations(r).is_empty());
    }

    #[test]
    fn no_route_variants() {
        assert!(convert_path(route("{}")).is_none());
        assert!(convert_path(route(r#"{"path": null}"#)).is_none());
        assert!(
            convert_path(route(
                r#"{"path": {"segments": [], "totalCost": -1, "totalDistance": 0}}"#
            ))
            .is_none()
        );
        assert!(
            convert_path(route(
                r#"{"path": {"segments": [{"mode": "WALK", "coords": [[17.4, 78.4], [17.5, 78.5]]}], "totalCost": -1}}"#
            ))
            .is_none()
        );
    }

    #[test]
    fn degenerate_segments_are_dropped() {
        let path = convert_path(route(
            r#"{"path": {"segments": [
                {"mode": "WALK", "coords": [[17.4, 78.4]]},
                {"mode": "TRANSIT", "coords": [[17.4, 78.4], [17.5, 78.5]]}
            ], "totalCost": 300, "totalDistance": 1500}}"#,
        ))
        .unwrap();
        assert_eq!(path.segments().len(), 1);
        assert_eq!(path.segments()[0].mode(), SegmentMode::Transit);
    }

    #[test]
    fn only_degenerate_segments_is_no_route() {
        assert!(
            convert_path(route(
                r#"{"path": {"segments": [{"mode": "WALK", "coords": [[17.4, 78.4]]}], "totalCost": 0}}"#
            ))
            .is_none()
        );
    }

    #[test]
    fn missing_distance_defaults_to_zero() {
        let path = convert_path(route(
            r#"{"path": {"segments": [{"mode": "DRIVE", "coords": [[17.4, 78.4], [17.5, 78.5]]}], "totalCost": 120}}"#,
        ))
        .unwrap();
        assert_eq!(path.total_distance_m(), 0.0);
        assert_eq!(path.total_cost_secs(), 120.0);
    }
}
