//! Point selection: slot setters, click-to-select, and geolocation.
//!
//! Three input paths (map click, search pick, geolocation) all end in
//! [`Session::set_point`]. The click state is derived from slot occupancy
//! every time it is needed, so the paths cannot drift apart.

use tracing::{debug, info, warn};

use crate::domain::{GeoPoint, Slot};
use crate::view::{MapView, Marker, MarkerIcon, Notice, Panel};

use super::Session;
use super::slot::SelectionSlot;

/// Label given to the origin when it comes from the device position.
pub const CURRENT_LOCATION: &str = "Current Location";

/// Where the next map click goes, derived from which slots are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickState {
    /// No origin: next click sets the origin
    Empty,
    /// Origin only: next click sets the destination
    OriginSet,
    /// Both set: next click replaces the origin and clears the destination
    BothSet,
}

/// A rejected selection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    #[error("point {0} is outside the permitted region")]
    OutsideRegion(GeoPoint),
}

/// Device position lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("location access denied")]
    Denied,
    #[error("location unavailable")]
    Unavailable,
}

impl Session {
    /// Where the next valid click will go.
    pub fn click_state(&self) -> ClickState {
        match (self.origin.is_filled(), self.destination.is_filled()) {
            (false, _) => ClickState::Empty,
            (true, false) => ClickState::OriginSet,
            (true, true) => ClickState::BothSet,
        }
    }

    /// Fill or clear a slot.
    ///
    /// Any marker the slot held is removed first. With a point, a new marker
    /// is placed and the label becomes `name` or the coordinate string; a
    /// name is also written into the slot's search input and the view
    /// recenters on it. Without a point the slot is emptied, including its
    /// label and search input.
    pub fn set_point<V: MapView + Panel>(
        &mut self,
        view: &mut V,
        slot: Slot,
        point: Option<GeoPoint>,
        name: Option<&str>,
    ) {
        let previous = std::mem::take(self.slot_mut(slot));
        if let Some(marker) = previous.marker() {
            view.remove_layer(marker);
        }

        let Some(point) = point else {
            view.set_slot_label(slot, None);
            view.set_search_text(slot, "");
            debug!(%slot, "slot cleared");
            return;
        };

        let marker = view.add_marker(Marker {
            point,
            icon: MarkerIcon::for_slot(slot),
            popup: None,
        });
        let label = name.map_or_else(|| point.to_string(), str::to_string);
        view.set_slot_label(slot, Some(&label));

        if let Some(name) = name {
            view.set_search_text(slot, name);
            view.set_view(point, self.map.focus_zoom);
        }

        debug!(%slot, %point, %label, "slot set");
        *self.slot_mut(slot) = SelectionSlot::Filled {
            point,
            label,
            marker,
        };
    }

    pub fn set_origin<V: MapView + Panel>(
        &mut self,
        view: &mut V,
        point: Option<GeoPoint>,
        name: Option<&str>,
    ) {
        self.set_point(view, Slot::Origin, point, name);
    }

    pub fn set_destination<V: MapView + Panel>(
        &mut self,
        view: &mut V,
        point: Option<GeoPoint>,
        name: Option<&str>,
    ) {
        self.set_point(view, Slot::Destination, point, name);
    }

    /// Handle a map click.
    ///
    /// Clicks outside the permitted region raise a notice and change
    /// nothing. Otherwise the click fills the origin, then the destination,
    /// then starts over with a new origin. Returns the state after the click.
    pub fn click<V: MapView + Panel>(
        &mut self,
        view: &mut V,
        point: GeoPoint,
    ) -> Result<ClickState, SelectionError> {
        if !self.gate.admits(&point) {
            info!(%point, "click outside permitted region");
            view.alert(Notice::OutsideRegion);
            return Err(SelectionError::OutsideRegion(point));
        }

        match self.click_state() {
            ClickState::Empty => self.set_origin(view, Some(point), None),
            ClickState::OriginSet => self.set_destination(view, Some(point), None),
            ClickState::BothSet => {
                self.set_origin(view, Some(point), None);
                self.set_destination(view, None, None);
            }
        }

        Ok(self.click_state())
    }

    /// Apply the outcome of a device position request.
    ///
    /// Success sets the origin as "Current Location" (which recenters the
    /// view); failure raises a notice and changes nothing.
    pub fn geolocated<V: MapView + Panel>(
        &mut self,
        view: &mut V,
        result: Result<GeoPoint, GeolocationError>,
    ) -> Result<(), GeolocationError> {
        match result {
            Ok(point) => {
                self.set_origin(view, Some(point), Some(CURRENT_LOCATION));
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "geolocation failed");
                view.alert(Notice::LocationDenied);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapConfig;
    use crate::domain::GeoBox;
    use crate::view::RecordingView;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn bounded_session(view: &mut RecordingView) -> Session {
        let mut session = Session::new(MapConfig::default());
        let raw = GeoBox::new(17.2, 78.3, 17.6, 78.7).unwrap();
        session.gate.install(view, raw, 0.01);
        session
    }

    #[test]
    fn three_clicks_cycle_back_to_origin() {
        let mut view = RecordingView::new();
        let mut session = bounded_session(&mut view);
        let (a, b, c) = (pt(17.30, 78.40), pt(17.40, 78.50), pt(17.50, 78.60));

        assert_eq!(session.click_state(), ClickState::Empty);
        assert_eq!(session.click(&mut view, a), Ok(ClickState::OriginSet));
        assert_eq!(session.click(&mut view, b), Ok(ClickState::BothSet));
        assert_eq!(session.point(Slot::Origin), Some(a));
        assert_eq!(session.point(Slot::Destination), Some(b));

        assert_eq!(session.click(&mut view, c), Ok(ClickState::OriginSet));
        assert_eq!(session.point(Slot::Origin), Some(c));
        assert_eq!(session.point(Slot::Destination), None);

        assert_eq!(view.markers(MarkerIcon::Origin).len(), 1);
        assert_eq!(view.markers(MarkerIcon::Destination).len(), 0);
        assert_eq!(view.label(Slot::Destination), None);
    }

    #[test]
    fn click_outside_region_is_rejected() {
        let mut view = RecordingView::new();
        let mut session = bounded_session(&mut view);
        session.click(&mut view, pt(17.4, 78.5)).unwrap();

        let outside = pt(18.0, 78.5);
        assert_eq!(
            session.click(&mut view, outside),
            Err(SelectionError::OutsideRegion(outside))
        );
        assert_eq!(view.alerts, vec![Notice::OutsideRegion]);
        assert_eq!(session.click_state(), ClickState::OriginSet);
        assert_eq!(session.point(Slot::Destination), None);
    }

    #[test]
    fn unbounded_session_accepts_any_click() {
        let mut view = RecordingView::new();
        let mut session = Session::new(MapConfig::default());
        assert!(session.click(&mut view, pt(-33.9, 151.2)).is_ok());
    }

    #[test]
    fn unnamed_point_gets_coordinate_label() {
        let mut view = RecordingView::new();
        let mut session = Session::new(MapConfig::default());
        session.set_origin(&mut view, Some(pt(17.385, 78.4867)), None);

        assert_eq!(session.slot(Slot::Origin).label(), Some("17.3850, 78.4867"));
        assert_eq!(view.label(Slot::Origin), Some("17.3850, 78.4867"));
        assert!(view.views.is_empty());
    }

    #[test]
    fn named_point_fills_search_and_recenters() {
        let mut view = RecordingView::new();
        let mut session = Session::new(MapConfig::default());
        let p = pt(17.3616, 78.4747);
        session.set_destination(&mut view, Some(p), Some("Charminar"));

        assert_eq!(view.label(Slot::Destination), Some("Charminar"));
        assert_eq!(view.search_text[&Slot::Destination], "Charminar");
        assert_eq!(view.views.last(), Some(&(p, 15)));
    }

    #[test]
    fn replacing_a_point_replaces_its_marker() {
        let mut view = RecordingView::new();
        let mut session = Session::new(MapConfig::default());
        session.set_origin(&mut view, Some(pt(17.3, 78.4)), None);
        session.set_origin(&mut view, Some(pt(17.4, 78.5)), None);

        let markers = view.markers(MarkerIcon::Origin);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].point, pt(17.4, 78.5));
    }

    #[test]
    fn clearing_empties_everything() {
        let mut view = RecordingView::new();
        let mut session = Session::new(MapConfig::default());
        session.set_origin(&mut view, Some(pt(17.3, 78.4)), Some("Home"));
        session.set_origin(&mut view, None, None);

        assert_eq!(*session.slot(Slot::Origin), SelectionSlot::Empty);
        assert!(view.markers(MarkerIcon::Origin).is_empty());
        assert_eq!(view.label(Slot::Origin), None);
        assert_eq!(view.search_text[&Slot::Origin], "");
    }

    #[test]
    fn search_can_fill_destination_first() {
        let mut view = RecordingView::new();
        let mut session = Session::new(MapConfig::default());
        session.set_destination(&mut view, Some(pt(17.4, 78.5)), Some("Airport"));
        assert_eq!(session.click_state(), ClickState::Empty);

        // The next click fills the missing origin, leaving both set.
        assert_eq!(
            session.click(&mut view, pt(17.3, 78.4)),
            Ok(ClickState::BothSet)
        );
        assert_eq!(session.slot(Slot::Destination).label(), Some("Airport"));
    }

    #[test]
    fn geolocation_sets_origin() {
        let mut view = RecordingView::new();
        let mut session = Session::new(MapConfig::default());
        let here = pt(17.44, 78.38);

        assert!(session.geolocated(&mut view, Ok(here)).is_ok());
        assert_eq!(session.point(Slot::Origin), Some(here));
        assert_eq!(session.slot(Slot::Origin).label(), Some(CURRENT_LOCATION));
        assert_eq!(view.views.last(), Some(&(here, 15)));
    }

    #[test]
    fn geolocation_failure_changes_nothing() {
        let mut view = RecordingView::new();
        let mut session = Session::new(MapConfig::default());
        session.set_origin(&mut view, Some(pt(17.3, 78.4)), None);

        let result = session.geolocated(&mut view, Err(GeolocationError::Denied));
        assert_eq!(result, Err(GeolocationError::Denied));
        assert_eq!(view.alerts, vec![Notice::LocationDenied]);
        assert_eq!(session.point(Slot::Origin), Some(pt(17.3, 78.4)));
    }
}
