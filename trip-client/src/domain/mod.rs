//! Domain types for the trip planner client.
//!
//! These types are validated at construction time: a `GeoPoint` is always
//! a finite WGS84 coordinate, a `Segment` always has at least two points,
//! and a `RoutePath` always has at least one segment and a real cost.
//! Code that receives them does not need to re-check.

mod bounds;
mod error;
mod mode;
mod place;
mod point;
mod route;
mod slot;

pub use bounds::BoundsRegion;
pub use error::DomainError;
pub use mode::{SegmentMode, TravelMode};
pub use place::{Charger, Station, Suggestion, short_label};
pub use point::{GeoBox, GeoPoint};
pub use route::{RoutePath, RouteQuery, Segment};
pub use slot::Slot;
