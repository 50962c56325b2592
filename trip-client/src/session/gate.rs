//! Bounds gate: the region point selection is restricted to.

use tracing::{info, warn};

use crate::domain::{BoundsRegion, GeoBox, GeoPoint};
use crate::view::{LayerId, MapView};

/// Holds the permitted region once the backend has reported it.
///
/// Until then (or forever, if the backend never does) the gate is open and
/// admits every point.
#[derive(Debug, Default)]
pub struct RegionGate {
    region: Option<BoundsRegion>,
    mask: Option<LayerId>,
}

impl RegionGate {
    /// Install the region, mask everything outside it and fit the view.
    ///
    /// The region is set at most once; later calls are ignored and return
    /// `false`.
    pub fn install<V: MapView>(&mut self, view: &mut V, raw: GeoBox, padding_deg: f64) -> bool {
        if self.region.is_some() {
            warn!("permitted region already installed, ignoring new extent");
            return false;
        }

        let region = BoundsRegion::from_extent(raw, padding_deg);
        self.mask = Some(view.add_mask(&region));
        view.fit_bounds(region.extent(), 0);
        info!(region = %region.extent().to_bbox_string(), "permitted region installed");

        self.region = Some(region);
        true
    }

    /// Check whether a point may be selected. Open when no region is known.
    pub fn admits(&self, point: &GeoPoint) -> bool {
        self.region.as_ref().is_none_or(|r| r.admits(point))
    }

    pub fn region(&self) -> Option<&BoundsRegion> {
        self.region.as_ref()
    }

    /// Hand over the mask layer for removal.
    pub(crate) fn take_mask(&mut self) -> Option<LayerId> {
        self.mask.take()
    }
}
