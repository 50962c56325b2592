//! Travel and segment modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// The modality requested from the router.
///
/// Exactly one mode is selected at a time. Serialised lowercase in the
/// route request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Transit,
    Walk,
    Drive,
}

impl TravelMode {
    /// The fixed set of selectable modes, in button order.
    pub const ALL: [TravelMode; 3] = [TravelMode::Transit, TravelMode::Walk, TravelMode::Drive];

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Transit => "transit",
            TravelMode::Walk => "walk",
            TravelMode::Drive => "drive",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "transit" => Ok(TravelMode::Transit),
            "walk" => Ok(TravelMode::Walk),
            "drive" => Ok(TravelMode::Drive),
            _ => Err(DomainError::UnknownMode(s.to_string())),
        }
    }
}

/// The modality of one leg of a computed path.
///
/// The backend sends these upper-case. Anything it sends that we don't
/// know lands in `Other` and is drawn like a road leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SegmentMode {
    Drive,
    Walk,
    Transit,
    #[serde(other)]
    Other,
}

impl SegmentMode {
    pub fn is_transit(&self) -> bool {
        matches!(self, SegmentMode::Transit)
    }
}
