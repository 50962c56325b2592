//! Routing backend client.
//!
//! The backend owns the road/transit graph. The client only reads four
//! endpoints:
//! - `GET /bounds` - extent of the routable graph (may be empty)
//! - `GET /stations` - transit stations for the overlay
//! - `GET /evs` - EV charging points for the overlay
//! - `POST /route` - compute a path between two points for a travel mode
//!
//! A route answer with no path, no segments, or `totalCost == -1` means
//! "no route" and is surfaced as `Ok(None)`, not as an error.

mod client;
mod convert;
mod error;
mod types;

pub use client::{BackendClient, RouteBackend};
pub use convert::{convert_bounds, convert_chargers, convert_path, convert_stations};
pub use error::BackendError;
pub use types::{
    BoundsDto, BoundsResponse, EvDto, EvsResponse, PathDto, RouteRequestBody, RouteResponse,
    SegmentDto, StationDto, StationsResponse,
};
