//! View that narrates every operation through `tracing`.
//!
//! Backs the terminal host: there is no map, so each draw call becomes a
//! log line the user can read.

use tracing::{info, warn};

use crate::command::suggestion_number;
use crate::domain::{BoundsRegion, GeoBox, GeoPoint, Slot, Suggestion, TravelMode};
use crate::route::RouteSummary;

use super::{LayerId, MapView, Marker, Notice, Panel, PolylineStyle, TileLayer};

/// One line per suggestion, numbered the way `pick` expects.
pub fn suggestion_lines(items: &[Suggestion]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| format!("[{}] {} ({})", suggestion_number(idx), item.label, item.point))
        .collect()
}

#[derive(Debug, Default)]
pub struct ConsoleView {
    next_id: u64,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> LayerId {
        self.next_id += 1;
        LayerId(self.next_id)
    }
}

impl MapView for ConsoleView {
    fn add_marker(&mut self, marker: Marker) -> LayerId {
        let id = self.next();
        info!(
            layer = id.0,
            icon = ?marker.icon,
            at = %marker.point,
            popup = marker.popup.as_deref().unwrap_or(""),
            "marker"
        );
        id
    }

    fn add_polyline(&mut self, coords: &[GeoPoint], style: &PolylineStyle) -> LayerId {
        let id = self.next();
        info!(
            layer = id.0,
            points = coords.len(),
            color = style.color,
            dashed = style.dash_array.is_some(),
            "polyline"
        );
        id
    }

    fn add_mask(&mut self, region: &BoundsRegion) -> LayerId {
        let id = self.next();
        info!(layer = id.0, region = %region.extent().to_bbox_string(), "mask outside region");
        id
    }

    fn remove_layer(&mut self, layer: LayerId) {
        info!(layer = layer.0, "remove layer");
    }

    fn fit_bounds(&mut self, extent: &GeoBox, padding_px: u32) {
        info!(bbox = %extent.to_bbox_string(), padding_px, "fit view");
    }

    fn set_view(&mut self, center: GeoPoint, zoom: u8) {
        info!(center = %center, zoom, "set view");
    }

    fn set_tile_layer(&mut self, layer: TileLayer) {
        info!(tiles = ?layer, "tile layer");
    }

    fn set_tilted(&mut self, tilted: bool) {
        info!(tilted, "perspective");
    }
}

impl Panel for ConsoleView {
    fn alert(&mut self, notice: Notice) {
        warn!("{}", notice.message());
    }

    fn set_slot_label(&mut self, slot: Slot, label: Option<&str>) {
        info!(%slot, label = label.unwrap_or("Click on map to select..."), "slot");
    }

    fn set_search_text(&mut self, slot: Slot, text: &str) {
        info!(%slot, text, "search input");
    }

    fn show_suggestions(&mut self, slot: Slot, items: &[Suggestion]) {
        for line in suggestion_lines(items) {
            info!(%slot, "  {line}");
        }
    }

    fn hide_suggestions(&mut self, _slot: Slot) {}

    fn set_active_mode(&mut self, mode: TravelMode) {
        info!(%mode, "mode");
    }

    fn show_busy(&mut self) {
        info!("finding route...");
    }

    fn hide_busy(&mut self) {}

    fn show_route_error(&mut self, message: &str) {
        warn!("{message}");
    }

    fn show_summary(&mut self, summary: &RouteSummary) {
        info!(
            duration = %summary.duration_label(),
            distance = %summary.distance_label(),
            "route"
        );
    }

    fn hide_summary(&mut self) {}
}
