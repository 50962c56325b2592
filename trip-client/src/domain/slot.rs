//! Endpoint slot identifiers.

use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// One of the two independent endpoint holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Origin,
    Destination,
}

impl Slot {
    /// Both slots, origin first.
    pub const ALL: [Slot; 2] = [Slot::Origin, Slot::Destination];

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Origin => "origin",
            Slot::Destination => "destination",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = DomainError;

    /// Accepts the full names plus the `start`/`end` aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "origin" | "start" | "from" => Ok(Slot::Origin),
            "destination" | "end" | "to" => Ok(Slot::Destination),
            _ => Err(DomainError::UnknownSlot(s.to_string())),
        }
    }
}
