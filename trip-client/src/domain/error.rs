//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from transport errors raised by the HTTP clients.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Coordinate is not finite or outside the WGS84 range
    #[error("invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Box edges are inverted (south above north or west east of east)
    #[error("invalid box: {0}")]
    InvalidBox(&'static str),

    /// A segment needs at least two points to be drawn
    #[error("segment has {0} point(s), need at least 2")]
    DegenerateSegment(usize),

    /// Path has no segments
    #[error("route path must have at least one segment")]
    EmptyPath,

    /// Path cost is the "no route" sentinel or not a real number
    #[error("route path has no usable cost ({0})")]
    NoCost(f64),

    /// Travel mode string not recognised
    #[error("unknown travel mode: {0}")]
    UnknownMode(String),

    /// Slot name not recognised
    #[error("unknown slot: {0}")]
    UnknownSlot(String),
}
