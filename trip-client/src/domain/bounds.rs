//! The permitted operating region.

use super::point::{GeoBox, GeoPoint};

/// The padded rectangle outside which point selection is refused.
///
/// Built once from the backend's raw extent plus a uniform margin and never
/// changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsRegion {
    extent: GeoBox,
}

impl BoundsRegion {
    /// Pad the raw data extent by `margin` degrees on every side.
    pub fn from_extent(raw: GeoBox, margin: f64) -> Self {
        Self {
            extent: raw.padded(margin),
        }
    }

    /// Check whether a point may be selected.
    pub fn admits(&self, point: &GeoPoint) -> bool {
        self.extent.contains(point)
    }

    /// The padded rectangle.
    pub fn extent(&self) -> &GeoBox {
        &self.extent
    }
}
