//! In-memory view that records what the client asked it to do.
//!
//! Used by tests to assert on drawn layers and panel state without a map.

use std::collections::{BTreeMap, HashMap};

use crate::domain::{BoundsRegion, GeoBox, GeoPoint, Slot, Suggestion, TravelMode};
use crate::route::RouteSummary;

use super::{LayerId, MapView, Marker, MarkerIcon, Notice, Panel, PolylineStyle, TileLayer};

/// A layer currently on the recorded map.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedLayer {
    Marker(Marker),
    Polyline {
        coords: Vec<GeoPoint>,
        style: PolylineStyle,
    },
    Mask(BoundsRegion),
}

/// Records map and panel operations.
#[derive(Debug, Default)]
pub struct RecordingView {
    next_id: u64,

    /// Live layers, keyed by handle
    pub layers: BTreeMap<u64, RecordedLayer>,
    /// Every `fit_bounds` call, in order
    pub fitted: Vec<(GeoBox, u32)>,
    /// Every `set_view` call, in order
    pub views: Vec<(GeoPoint, u8)>,
    pub tiles: TileLayer,
    pub tilted: bool,

    /// Alerts raised, in order
    pub alerts: Vec<Notice>,
    /// Slot labels; absent or `None` means the placeholder hint
    pub slot_labels: HashMap<Slot, Option<String>>,
    pub search_text: HashMap<Slot, String>,
    /// Open suggestion lists
    pub suggestions: HashMap<Slot, Vec<Suggestion>>,
    pub active_mode: Option<TravelMode>,

    pub busy: bool,
    pub busy_shown: usize,
    pub busy_hidden: usize,
    pub route_error: Option<String>,
    pub summary: Option<RouteSummary>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Polylines currently drawn, in drawing order.
    pub fn polylines(&self) -> Vec<(&[GeoPoint], &PolylineStyle)> {
        self.layers
            .values()
            .filter_map(|layer| match layer {
                RecordedLayer::Polyline { coords, style } => Some((coords.as_slice(), style)),
                _ => None,
            })
            .collect()
    }

    /// Markers currently drawn with the given icon.
    pub fn markers(&self, icon: MarkerIcon) -> Vec<&Marker> {
        self.layers
            .values()
            .filter_map(|layer| match layer {
                RecordedLayer::Marker(m) if m.icon == icon => Some(m),
                _ => None,
            })
            .collect()
    }

    /// Number of masks currently drawn.
    pub fn mask_count(&self) -> usize {
        self.layers
            .values()
            .filter(|layer| matches!(layer, RecordedLayer::Mask(_)))
            .count()
    }

    /// The label shown for a slot, `None` when showing the placeholder.
    pub fn label(&self, slot: Slot) -> Option<&str> {
        self.slot_labels.get(&slot).and_then(|l| l.as_deref())
    }

    pub fn suggestions_open(&self, slot: Slot) -> bool {
        self.suggestions.contains_key(&slot)
    }

    fn insert(&mut self, layer: RecordedLayer) -> LayerId {
        self.next_id += 1;
        self.layers.insert(self.next_id, layer);
        LayerId(self.next_id)
    }
}

impl MapView for RecordingView {
    fn add_marker(&mut self, marker: Marker) -> LayerId {
        self.insert(RecordedLayer::Marker(marker))
    }

    fn add_polyline(&mut self, coords: &[GeoPoint], style: &PolylineStyle) -> LayerId {
        self.insert(RecordedLayer::Polyline {
            coords: coords.to_vec(),
            style: *style,
        })
    }

    fn add_mask(&mut self, region: &BoundsRegion) -> LayerId {
        self.insert(RecordedLayer::Mask(*region))
    }

    fn remove_layer(&mut self, layer: LayerId) {
        self.layers.remove(&layer.0);
    }

    fn fit_bounds(&mut self, extent: &GeoBox, padding_px: u32) {
        self.fitted.push((*extent, padding_px));
    }

    fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        self.views.push((center, zoom));
    }

    fn set_tile_layer(&mut self, layer: TileLayer) {
        self.tiles = layer;
    }

    fn set_tilted(&mut self, tilted: bool) {
        self.tilted = tilted;
    }
}

impl Panel for RecordingView {
    fn alert(&mut self, notice: Notice) {
        self.alerts.push(notice);
    }

    fn set_slot_label(&mut self, slot: Slot, label: Option<&str>) {
        self.slot_labels.insert(slot, label.map(str::to_string));
    }

    fn set_search_text(&mut self, slot: Slot, text: &str) {
        self.search_text.insert(slot, text.to_string());
    }

    fn show_suggestions(&mut self, slot: Slot, items: &[Suggestion]) {
        self.suggestions.insert(slot, items.to_vec());
    }

    fn hide_suggestions(&mut self, slot: Slot) {
        self.suggestions.remove(&slot);
    }

    fn set_active_mode(&mut self, mode: TravelMode) {
        self.active_mode = Some(mode);
    }

    fn show_busy(&mut self) {
        self.busy = true;
        self.busy_shown += 1;
        self.route_error = None;
    }

    fn hide_busy(&mut self) {
        self.busy = false;
        self.busy_hidden += 1;
    }

    fn show_route_error(&mut self, message: &str) {
        self.busy = false;
        self.route_error = Some(message.to_string());
    }

    fn show_summary(&mut self, summary: &RouteSummary) {
        self.summary = Some(summary.clone());
    }

    fn hide_summary(&mut self) {
        self.summary = None;
    }
}
