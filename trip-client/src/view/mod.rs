//! Rendering collaborators.
//!
//! The client never draws anything itself. It talks to two traits:
//! - [`MapView`]: markers, polylines, masks, and the viewport
//! - [`Panel`]: the page widgets around the map (labels, search inputs,
//!   suggestion lists, status and summary areas, alerts)
//!
//! A browser host would back these with a map library and the DOM. The
//! terminal host uses [`ConsoleView`]; tests use [`RecordingView`].

mod console;
mod recording;

use crate::domain::{BoundsRegion, GeoBox, GeoPoint, Slot, Suggestion, TravelMode};
use crate::route::RouteSummary;

pub use console::{ConsoleView, suggestion_lines};
pub use recording::{RecordedLayer, RecordingView};

/// Handle to something drawn on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub u64);

/// Marker appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIcon {
    /// Pulsing blue dot
    Origin,
    /// Pulsing red dot
    Destination,
    /// Train glyph
    Station,
    /// Lightning glyph
    Charger,
}

impl MarkerIcon {
    /// Pulse colour for endpoint markers.
    pub fn color(&self) -> Option<&'static str> {
        match self {
            MarkerIcon::Origin => Some("#2563eb"),
            MarkerIcon::Destination => Some("#ef4444"),
            MarkerIcon::Station | MarkerIcon::Charger => None,
        }
    }

    /// The endpoint marker for a slot.
    pub fn for_slot(slot: Slot) -> Self {
        match slot {
            Slot::Origin => MarkerIcon::Origin,
            Slot::Destination => MarkerIcon::Destination,
        }
    }
}

/// A point marker with an optional popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub point: GeoPoint,
    pub icon: MarkerIcon,
    pub popup: Option<String>,
}

/// How a polyline is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineStyle {
    pub color: &'static str,
    pub weight: u8,
    pub opacity: f32,
    /// Dash pattern, `None` for solid
    pub dash_array: Option<&'static str>,
    pub class_name: &'static str,
    pub line_cap: &'static str,
}

/// Base map tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileLayer {
    #[default]
    Streets,
    Satellite,
}

impl TileLayer {
    pub fn toggled(self) -> Self {
        match self {
            TileLayer::Streets => TileLayer::Satellite,
            TileLayer::Satellite => TileLayer::Streets,
        }
    }

    /// Tile URL template.
    pub fn url_template(&self) -> &'static str {
        match self {
            TileLayer::Streets => {
                "https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png"
            }
            TileLayer::Satellite => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            }
        }
    }
}

/// User-facing alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// A click landed outside the permitted region
    OutsideRegion,
    /// Geolocation was denied or failed
    LocationDenied,
    /// A route was requested before both endpoints were set
    SelectPoints,
    /// The backend answered but found no route
    NoRoute,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::OutsideRegion => "Select a point within the highlighted area.",
            Notice::LocationDenied => "Location access denied.",
            Notice::SelectPoints => "Select points.",
            Notice::NoRoute => "No results found.",
        }
    }
}

/// Inline message shown in the status area when the route request fails.
pub const CONNECTION_FAILED: &str = "Connection failed.";

/// Map-layer capabilities the client needs.
pub trait MapView {
    /// Place a marker; returns a handle for later removal.
    fn add_marker(&mut self, marker: Marker) -> LayerId;

    /// Draw a styled polyline through the coordinates.
    fn add_polyline(&mut self, coords: &[GeoPoint], style: &PolylineStyle) -> LayerId;

    /// Shade everything outside the region. The mask takes no input.
    fn add_mask(&mut self, region: &BoundsRegion) -> LayerId;

    /// Remove a previously added layer. Unknown handles are ignored.
    fn remove_layer(&mut self, layer: LayerId);

    /// Fit the viewport to a box, with pixel padding on each side.
    fn fit_bounds(&mut self, extent: &GeoBox, padding_px: u32);

    /// Center the viewport on a point at a zoom level.
    fn set_view(&mut self, center: GeoPoint, zoom: u8);

    /// Swap the base tile layer.
    fn set_tile_layer(&mut self, layer: TileLayer);

    /// Tilt the map into (or out of) perspective view.
    fn set_tilted(&mut self, tilted: bool);
}

/// Page widgets around the map.
pub trait Panel {
    /// Show a blocking alert.
    fn alert(&mut self, notice: Notice);

    /// Label shown for a slot; `None` restores the "click to select" hint.
    fn set_slot_label(&mut self, slot: Slot, label: Option<&str>);

    /// Replace the text in a slot's search input.
    fn set_search_text(&mut self, slot: Slot, text: &str);

    /// Open (or repaint) a slot's suggestion list.
    fn show_suggestions(&mut self, slot: Slot, items: &[Suggestion]);

    /// Close a slot's suggestion list.
    fn hide_suggestions(&mut self, slot: Slot);

    /// Mark one mode button active and all others inactive.
    fn set_active_mode(&mut self, mode: TravelMode);

    fn show_busy(&mut self);

    fn hide_busy(&mut self);

    /// Replace the status area with an error message.
    fn show_route_error(&mut self, message: &str);

    fn show_summary(&mut self, summary: &RouteSummary);

    fn hide_summary(&mut self);
}
