//! Selection slot state.

use crate::domain::GeoPoint;
use crate::view::LayerId;

/// One endpoint holder.
///
/// Either fully empty or fully populated: a point always comes with its
/// label and its marker, so no partially filled state can be written.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SelectionSlot {
    #[default]
    Empty,
    Filled {
        point: GeoPoint,
        /// Place name, or the coordinate string for unnamed points
        label: String,
        marker: LayerId,
    },
}

impl SelectionSlot {
    pub fn is_filled(&self) -> bool {
        matches!(self, SelectionSlot::Filled { .. })
    }

    pub fn point(&self) -> Option<GeoPoint> {
        match self {
            SelectionSlot::Filled { point, .. } => Some(*point),
            SelectionSlot::Empty => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            SelectionSlot::Filled { label, .. } => Some(label),
            SelectionSlot::Empty => None,
        }
    }

    pub fn marker(&self) -> Option<LayerId> {
        match self {
            SelectionSlot::Filled { marker, .. } => Some(*marker),
            SelectionSlot::Empty => None,
        }
    }
}
