//! Session state.
//!
//! One [`Session`] exists per page load. It owns everything the client
//! mutates: the permitted region, both selection slots, both search fields,
//! the travel mode, and the handles of every layer it drew. It is changed
//! only through the operations defined here and in [`crate::route`], and
//! [`Session::teardown`] removes everything it put on the map.

mod gate;
mod selector;
mod slot;

use tracing::{debug, info, warn};

use crate::backend::BackendError;
use crate::config::MapConfig;
use crate::domain::{BoundsRegion, Charger, GeoBox, GeoPoint, Slot, Station, TravelMode};
use crate::search::SearchField;
use crate::view::{LayerId, MapView, Marker, MarkerIcon, Panel, TileLayer};

pub use gate::RegionGate;
pub use selector::{CURRENT_LOCATION, ClickState, GeolocationError, SelectionError};
pub use slot::SelectionSlot;

/// Client state for one page load.
#[derive(Debug)]
pub struct Session {
    pub(crate) gate: RegionGate,
    pub(crate) origin: SelectionSlot,
    pub(crate) destination: SelectionSlot,
    pub(crate) origin_search: SearchField,
    pub(crate) destination_search: SearchField,
    pub(crate) mode: TravelMode,
    /// Polylines of the route currently drawn
    pub(crate) route_layers: Vec<LayerId>,
    /// Ticket of the most recent route request
    pub(crate) route_ticket: u64,
    /// Station and charger markers
    pub(crate) overlay_layers: Vec<LayerId>,
    pub(crate) tiles: TileLayer,
    pub(crate) tilted: bool,
    pub(crate) map: MapConfig,
}

impl Session {
    pub fn new(map: MapConfig) -> Self {
        Self {
            gate: RegionGate::default(),
            origin: SelectionSlot::Empty,
            destination: SelectionSlot::Empty,
            origin_search: SearchField::default(),
            destination_search: SearchField::default(),
            mode: TravelMode::default(),
            route_layers: Vec::new(),
            route_ticket: 0,
            overlay_layers: Vec::new(),
            tiles: TileLayer::default(),
            tilted: false,
            map,
        }
    }

    /// Put the map into its startup state.
    pub fn open<V: MapView + Panel>(&self, view: &mut V) {
        view.set_view(self.map.initial_center, self.map.initial_zoom);
        view.set_tile_layer(self.tiles);
        view.set_active_mode(self.mode);
    }

    pub fn region(&self) -> Option<&BoundsRegion> {
        self.gate.region()
    }

    pub fn slot(&self, slot: Slot) -> &SelectionSlot {
        match slot {
            Slot::Origin => &self.origin,
            Slot::Destination => &self.destination,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut SelectionSlot {
        match slot {
            Slot::Origin => &mut self.origin,
            Slot::Destination => &mut self.destination,
        }
    }

    pub fn point(&self, slot: Slot) -> Option<GeoPoint> {
        self.slot(slot).point()
    }

    pub fn search(&self, slot: Slot) -> &SearchField {
        match slot {
            Slot::Origin => &self.origin_search,
            Slot::Destination => &self.destination_search,
        }
    }

    pub fn search_mut(&mut self, slot: Slot) -> &mut SearchField {
        match slot {
            Slot::Origin => &mut self.origin_search,
            Slot::Destination => &mut self.destination_search,
        }
    }

    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    /// Choose the travel mode used by the next route request.
    pub fn select_mode<V: Panel>(&mut self, view: &mut V, mode: TravelMode) {
        self.mode = mode;
        view.set_active_mode(mode);
        debug!(%mode, "travel mode selected");
    }

    pub fn tiles(&self) -> TileLayer {
        self.tiles
    }

    /// Swap between street and satellite tiles.
    pub fn toggle_tiles<V: MapView>(&mut self, view: &mut V) -> TileLayer {
        self.tiles = self.tiles.toggled();
        view.set_tile_layer(self.tiles);
        self.tiles
    }

    pub fn tilted(&self) -> bool {
        self.tilted
    }

    pub fn toggle_tilt<V: MapView>(&mut self, view: &mut V) -> bool {
        self.tilted = !self.tilted;
        view.set_tilted(self.tilted);
        self.tilted
    }

    /// Apply the result of the startup bounds request.
    ///
    /// Any failure leaves the region unconstrained.
    pub fn apply_bounds<V: MapView>(
        &mut self,
        view: &mut V,
        result: Result<Option<GeoBox>, BackendError>,
    ) {
        match result {
            Ok(Some(raw)) => {
                self.gate.install(view, raw, self.map.bounds_padding_deg);
            }
            Ok(None) => info!("backend reported no region, selection is unconstrained"),
            Err(e) => warn!(error = %e, "failed to load region, selection is unconstrained"),
        }
    }

    pub fn show_stations<V: MapView>(
        &mut self,
        view: &mut V,
        result: Result<Vec<Station>, BackendError>,
    ) {
        let stations = match result {
            Ok(stations) => stations,
            Err(e) => {
                warn!(error = %e, "failed to load stations");
                return;
            }
        };

        for station in stations {
            let layer = view.add_marker(Marker {
                point: station.point,
                icon: MarkerIcon::Station,
                popup: Some(format!("{}\nTransit Station", station.name)),
            });
            self.overlay_layers.push(layer);
        }
    }

    pub fn show_chargers<V: MapView>(
        &mut self,
        view: &mut V,
        result: Result<Vec<Charger>, BackendError>,
    ) {
        let chargers = match result {
            Ok(chargers) => chargers,
            Err(e) => {
                warn!(error = %e, "failed to load chargers");
                return;
            }
        };

        for charger in chargers {
            let layer = view.add_marker(Marker {
                point: charger.point,
                icon: MarkerIcon::Charger,
                popup: Some(format!(
                    "EV Charging Station\nType: {}",
                    charger.kind_label()
                )),
            });
            self.overlay_layers.push(layer);
        }
    }

    /// Remove every layer this session drew.
    pub fn teardown<V: MapView>(&mut self, view: &mut V) {
        let endpoints = [
            std::mem::take(&mut self.origin),
            std::mem::take(&mut self.destination),
        ];
        let layers = endpoints
            .iter()
            .filter_map(SelectionSlot::marker)
            .chain(self.gate.take_mask())
            .chain(self.route_layers.drain(..))
            .chain(self.overlay_layers.drain(..));

        let mut removed = 0;
        for layer in layers {
            view.remove_layer(layer);
            removed += 1;
        }
        info!(removed, "session torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::RecordingView;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn open_centres_on_configured_start() {
        let mut view = RecordingView::new();
        let session = Session::new(MapConfig::default());
        session.open(&mut view);

        assert_eq!(view.views, vec![(GeoPoint::HYDERABAD, 13)]);
        assert_eq!(view.active_mode, Some(TravelMode::Transit));
        assert_eq!(view.tiles, TileLayer::Streets);
    }

    #[test]
    fn bounds_failure_leaves_region_open() {
        let mut view = RecordingView::new();
        let mut session = Session::new(MapConfig::default());
        session.apply_bounds(
            &mut view,
            Err(BackendError::Api {
                status: 500,
                message: "down".into(),
            }),
        );
        assert!(session.region().is_none());
        assert_eq!(view.mask_count(), 0);

        session.apply_bounds(&mut view, Ok(None));
        assert!(session.region().is_none());
    }

    #[test]
    fn bounds_are_padded() {
        let mut view = RecordingView::new();
        let mut session = Session::new(MapConfig::default());
        let raw = GeoBox::new(17.2, 78.3, 17.6, 78.7).unwrap();
        session.apply_bounds(&mut view, Ok(Some(raw)));

        let extent = session.region().unwrap().extent();
        assert!((extent.south() - 17.19).abs() < 1e-9);
        assert!((extent.east() - 78.71).abs() < 1e-9);
    }

    #[test]
    fn overlays_carry_popups() {
        let mut view = RecordingView::new();
        let mut session = Session::new(MapConfig::default());
        session.show_stations(
            &mut view,
            Ok(vec![Station {
                name: "Ameerpet".into(),
                point: pt(17.437, 78.448),
            }]),
        );
        session.show_chargers(
            &mut view,
            Ok(vec![
                Charger {
                    kind: Some("CCS2".into()),
                    point: pt(17.40, 78.47),
                },
                Charger {
                    kind: None,
                    point: pt(17.41, 78.48),
                },
            ]),
        );

        let stations = view.markers(MarkerIcon::Station);
        assert_eq!(stations[0].popup.as_deref(), Some("Ameerpet\nTransit Station"));

        let popups: Vec<_> = view
            .markers(MarkerIcon::Charger)
            .iter()
            .filter_map(|m| m.popup.clone())
            .collect();
        assert_eq!(
            popups,
            vec![
                "EV Charging Station\nType: CCS2".to_string(),
                "EV Charging Station\nType: Standard".to_string(),
            ]
        );
    }

    #[test]
    fn mode_selection_is_exclusive() {
        let mut view = RecordingView::new();
        let mut session = Session::new(MapConfig::default());
        session.select_mode(&mut view, TravelMode::Walk);
        session.select_mode(&mut view, TravelMode::Drive);
        assert_eq!(session.mode(), TravelMode::Drive);
        assert_eq!(view.active_mode, Some(TravelMode::Drive));
    }

    #[test]
    fn toggles_flip_and_push_to_map() {
        let mut view = RecordingView::new();
        let mut session = Session::new(MapConfig::default());

        assert_eq!(session.toggle_tiles(&mut view), TileLayer::Satellite);
        assert_eq!(view.tiles, TileLayer::Satellite);
        assert_eq!(session.toggle_tiles(&mut view), TileLayer::Streets);

        assert!(session.toggle_tilt(&mut view));
        assert!(view.tilted);
        assert!(!session.toggle_tilt(&mut view));
    }

    #[test]
    fn teardown_removes_every_layer() {
        let mut view = RecordingView::new();
        let mut session = Session::new(MapConfig::default());
        let raw = GeoBox::new(17.2, 78.3, 17.6, 78.7).unwrap();
        session.apply_bounds(&mut view, Ok(Some(raw)));
        session.show_stations(
            &mut view,
            Ok(vec![Station {
                name: "Kukatpally".into(),
                point: pt(17.49, 78.40),
            }]),
        );
        session.click(&mut view, pt(17.3, 78.4)).unwrap();
        session.click(&mut view, pt(17.5, 78.6)).unwrap();
        assert!(!view.layers.is_empty());

        session.teardown(&mut view);
        assert!(view.layers.is_empty());
        assert_eq!(session.click_state(), ClickState::Empty);
    }
}
