//! Route requests and route drawing.
//!
//! [`Session::begin_route`](crate::session::Session::begin_route) and
//! [`Session::finish_route`](crate::session::Session::finish_route) bracket
//! one backend call. The event loop performs the call in between, so the
//! session never awaits.

mod render;
mod requester;

pub use render::{ROAD_STYLE, RouteSummary, TRANSIT_STYLE, draw_route, style_for};
pub use requester::{RouteOutcome, RouteTicket};
