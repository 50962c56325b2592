//! Route renderer.

use crate::domain::{RoutePath, SegmentMode};
use crate::view::{LayerId, MapView, PolylineStyle};

/// Transit legs: dashed red.
pub const TRANSIT_STYLE: PolylineStyle = PolylineStyle {
    color: "#dc2626",
    weight: 6,
    opacity: 0.8,
    dash_array: Some("12, 10"),
    class_name: "transit-path",
    line_cap: "round",
};

/// Drive and walk legs, and anything unrecognised: solid glowing blue.
pub const ROAD_STYLE: PolylineStyle = PolylineStyle {
    color: "#2563eb",
    weight: 8,
    opacity: 0.9,
    dash_array: None,
    class_name: "route-glow",
    line_cap: "round",
};

pub fn style_for(mode: SegmentMode) -> &'static PolylineStyle {
    if mode.is_transit() {
        &TRANSIT_STYLE
    } else {
        &ROAD_STYLE
    }
}

/// Duration and distance shown under a drawn route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Whole minutes, rounded up
    pub minutes: u64,
    pub kilometres: f64,
}

impl RouteSummary {
    pub fn from_path(path: &RoutePath) -> Self {
        Self {
            minutes: (path.total_cost_secs() / 60.0).ceil() as u64,
            kilometres: path.total_distance_m() / 1000.0,
        }
    }

    /// e.g. `13 min`
    pub fn duration_label(&self) -> String {
        format!("{} min", self.minutes)
    }

    /// e.g. `3.2 km`
    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.kilometres)
    }
}

/// Draw every segment of `path` and fit the view around all of them.
///
/// Returns the handles of the drawn polylines, in segment order.
pub fn draw_route<V: MapView>(view: &mut V, path: &RoutePath, padding_px: u32) -> Vec<LayerId> {
    let layers = path
        .segments()
        .iter()
        .map(|segment| view.add_polyline(segment.coords(), style_for(segment.mode())))
        .collect();

    view.fit_bounds(&path.extent(), padding_px);
    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, Segment};
    use crate::view::RecordingView;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn path(cost: f64, distance: f64) -> RoutePath {
        let seg = Segment::new(SegmentMode::Walk, vec![pt(17.3, 78.4), pt(17.31, 78.41)]).unwrap();
        RoutePath::new(vec![seg], cost, distance).unwrap()
    }

    #[test]
    fn summary_rounds_minutes_up() {
        let summary = RouteSummary::from_path(&path(754.0, 3200.0));
        assert_eq!(summary.duration_label(), "13 min");
        assert_eq!(summary.distance_label(), "3.2 km");
    }

    #[test]
    fn summary_exact_minutes_and_zero_distance() {
        let summary = RouteSummary::from_path(&path(600.0, 0.0));
        assert_eq!(summary.duration_label(), "10 min");
        assert_eq!(summary.distance_label(), "0.0 km");

        let summary = RouteSummary::from_path(&path(0.0, 49.0));
        assert_eq!(summary.duration_label(), "0 min");
        assert_eq!(summary.distance_label(), "0.0 km");
    }

    #[test]
    fn styles_are_mode_exhaustive() {
        assert_eq!(style_for(SegmentMode::Transit), &TRANSIT_STYLE);
        assert_eq!(style_for(SegmentMode::Drive), &ROAD_STYLE);
        assert_eq!(style_for(SegmentMode::Walk), &ROAD_STYLE);
        assert_eq!(style_for(SegmentMode::Other), &ROAD_STYLE);
        assert!(TRANSIT_STYLE.dash_array.is_some());
        assert!(ROAD_STYLE.weight > TRANSIT_STYLE.weight);
        assert!(ROAD_STYLE.opacity > TRANSIT_STYLE.opacity);
    }

    #[test]
    fn mixed_path_gets_two_styles_and_covering_fit() {
        let drive = Segment::new(
            SegmentMode::Drive,
            vec![pt(17.30, 78.40), pt(17.35, 78.45), pt(17.36, 78.44)],
        )
        .unwrap();
        let transit = Segment::new(
            SegmentMode::Transit,
            vec![pt(17.36, 78.44), pt(17.45, 78.52)],
        )
        .unwrap();
        let route = RoutePath::new(vec![drive.clone(), transit.clone()], 900.0, 5000.0).unwrap();

        let mut view = RecordingView::new();
        let layers = draw_route(&mut view, &route, 50);
        assert_eq!(layers.len(), 2);

        let lines = view.polylines();
        assert_eq!(lines.len(), 2);
        assert_ne!(lines[0].1, lines[1].1);
        assert_eq!(lines[1].0, transit.coords());

        let (fitted, padding) = view.fitted[0];
        assert_eq!(padding, 50);
        assert!(fitted.covers(&drive.extent()));
        assert!(fitted.covers(&transit.extent()));
    }
}
