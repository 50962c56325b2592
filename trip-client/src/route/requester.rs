//! Route requester.

use tracing::{debug, info, warn};

use crate::backend::BackendError;
use crate::domain::{RoutePath, RouteQuery};
use crate::session::Session;
use crate::view::{CONNECTION_FAILED, MapView, Notice, Panel};

use super::render::{RouteSummary, draw_route};

/// Identifies one route request. Only the latest ticket may draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTicket(u64);

/// How a route request ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    Drawn(RouteSummary),
    /// The backend answered but had no path
    NoRoute,
    /// The request never got a usable answer
    Failed,
    /// A newer request was started before this one finished
    Superseded,
}

impl Session {
    /// Start a route request.
    ///
    /// With either endpoint missing, raises a notice and returns `None`.
    /// Otherwise shows the busy indicator, clears the previous result, and
    /// returns the query to send along with its ticket.
    pub fn begin_route<V: MapView + Panel>(
        &mut self,
        view: &mut V,
    ) -> Option<(RouteTicket, RouteQuery)> {
        let (Some(origin), Some(destination)) = (self.origin.point(), self.destination.point())
        else {
            info!("route requested without both endpoints");
            view.alert(Notice::SelectPoints);
            return None;
        };

        view.show_busy();
        view.hide_summary();
        self.clear_route(view);

        self.route_ticket += 1;
        let query = RouteQuery {
            origin,
            destination,
            mode: self.mode,
        };
        debug!(ticket = self.route_ticket, mode = %query.mode, "route requested");
        Some((RouteTicket(self.route_ticket), query))
    }

    /// Finish the request identified by `ticket`.
    ///
    /// The busy indicator is hidden exactly once, when the latest request
    /// finishes. A superseded response leaves it to the newer request.
    pub fn finish_route<V: MapView + Panel>(
        &mut self,
        view: &mut V,
        ticket: RouteTicket,
        result: Result<Option<RoutePath>, BackendError>,
    ) -> RouteOutcome {
        if ticket.0 != self.route_ticket {
            debug!(ticket = ticket.0, latest = self.route_ticket, "stale route response dropped");
            return RouteOutcome::Superseded;
        }

        let outcome = match result {
            Err(e) => {
                warn!(error = %e, "route request failed");
                view.show_route_error(CONNECTION_FAILED);
                RouteOutcome::Failed
            }
            Ok(None) => {
                info!("backend found no route");
                view.alert(Notice::NoRoute);
                RouteOutcome::NoRoute
            }
            Ok(Some(path)) => {
                self.clear_route(view);
                self.route_layers = draw_route(view, &path, self.map.fit_padding_px);

                let summary = RouteSummary::from_path(&path);
                info!(
                    segments = path.segments().len(),
                    duration = %summary.duration_label(),
                    distance = %summary.distance_label(),
                    "route drawn"
                );
                view.show_summary(&summary);
                RouteOutcome::Drawn(summary)
            }
        };

        view.hide_busy();
        outcome
    }

    fn clear_route<V: MapView>(&mut self, view: &mut V) {
        for layer in self.route_layers.drain(..) {
            view.remove_layer(layer);
        }
    }
}
