//! Event loop.
//!
//! Everything the user does and everything the network answers arrives as
//! an [`Event`] on one channel. [`App::handle`] applies an event to the
//! session synchronously; network calls are spawned as tasks that post
//! their result back as another event. The session is therefore only ever
//! touched from the loop, one event at a time.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::backend::{BackendError, RouteBackend};
use crate::config::{ClientConfig, SearchConfig};
use crate::domain::{Charger, GeoBox, GeoPoint, RoutePath, Slot, Station, Suggestion, TravelMode};
use crate::geocode::{GeocodeError, PlaceQuery, PlaceSearch};
use crate::route::RouteTicket;
use crate::search::{InputOutcome, ListUpdate};
use crate::session::{GeolocationError, Session};
use crate::view::{MapView, Panel};


/// Inputs to the loop.
#[derive(Debug)]
pub enum Event {
    // User input
    MapClicked(GeoPoint),
    SearchInput { field: Slot, text: String },
    SuggestionPicked { field: Slot, index: usize },
    /// Pointer went down inside one search field (or inside none); lists of
    /// every other field close
    PointerDown { inside: Option<Slot> },
    Geolocated(Result<GeoPoint, GeolocationError>),
    ClearSlot(Slot),
    ModeSelected(TravelMode),
    FindRoute,
    ToggleSatellite,
    ToggleTilt,
    Shutdown,

    // Completions
    BoundsLoaded(Result<Option<GeoBox>, BackendError>),
    StationsLoaded(Result<Vec<Station>, BackendError>),
    ChargersLoaded(Result<Vec<Charger>, BackendError>),
    SearchQuiet { field: Slot, generation: u64 },
    SuggestionsArrived {
        field: Slot,
        seq: u64,
        result: Result<Vec<Suggestion>, GeocodeError>,
    },
    RouteFinished {
        ticket: RouteTicket,
        result: Result<Option<RoutePath>, BackendError>,
    },
}

/// Whether the loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// The client: session state, collaborators, and the event channel.
pub struct App<B, P, V> {
    backend: B,
    places: P,
    view: V,
    session: Session,
    search: SearchConfig,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
}

impl<B, P, V> App<B, P, V>
where
    B: RouteBackend,
    P: PlaceSearch,
    V: MapView + Panel,
{
    pub fn new(config: &ClientConfig, backend: B, places: P, view: V) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            backend,
            places,
            view,
            session: Session::new(config.map.clone()),
            search: config.search.clone(),
            tx,
            rx,
        }
    }

    /// A handle for posting input events into the loop.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Show the startup view and fire the three startup loads.
    pub fn start(&mut self) {
        self.session.open(&mut self.view);

        let backend = self.backend.clone();
        post(&self.tx, async move { Event::BoundsLoaded(backend.bounds().await) });

        let backend = self.backend.clone();
        post(&self.tx, async move { Event::StationsLoaded(backend.stations().await) });

        let backend = self.backend.clone();
        post(&self.tx, async move { Event::ChargersLoaded(backend.chargers().await) });
    }

    /// Apply one event.
    pub fn handle(&mut self, event: Event) -> Flow {
        let view = &mut self.view;
        let session = &mut self.session;

        match event {
            Event::MapClicked(point) => {
                if let Err(e) = session.click(view, point) {
                    debug!(error = %e, "click ignored");
                }
            }
            Event::SearchInput { field, text } => {
                let outcome = session
                    .search_mut(field)
                    .input(&text, self.search.min_query_chars);
                view.hide_suggestions(field);

                if let InputOutcome::Scheduled { generation } = outcome {
                    let debounce = self.search.debounce;
                    post(&self.tx, async move {
                        tokio::time::sleep(debounce).await;
                        Event::SearchQuiet { field, generation }
                    });
                }
            }
            Event::SearchQuiet { field, generation } => {
                if let Some(lookup) = session.search_mut(field).quiet(generation) {
                    let query = PlaceQuery {
                        text: lookup.text,
                        viewbox: session.region().map(|r| *r.extent()),
                    };
                    let places = self.places.clone();
                    let seq = lookup.seq;
                    post(&self.tx, async move {
                        let result = places.search(&query).await;
                        Event::SuggestionsArrived { field, seq, result }
                    });
                }
            }
            Event::SuggestionsArrived { field, seq, result } => {
                let max = self.search.max_suggestions;
                match session.search_mut(field).resolve(seq, result, max) {
                    ListUpdate::Show => {
                        view.show_suggestions(field, session.search(field).suggestions());
                    }
                    ListUpdate::Close => view.hide_suggestions(field),
                    ListUpdate::Stale => {}
                }
            }
            Event::SuggestionPicked { field, index } => {
                match session.search_mut(field).pick(index) {
                    Some(choice) => {
                        view.hide_suggestions(field);
                        session.set_point(view, field, Some(choice.point), Some(&choice.label));
                    }
                    None => warn!(%field, index, "no such suggestion"),
                }
            }
            Event::PointerDown { inside } => {
                for field in Slot::ALL {
                    if Some(field) != inside && session.search_mut(field).close() {
                        view.hide_suggestions(field);
                    }
                }
            }
            Event::Geolocated(result) => {
                // Failure has already been surfaced as a notice.
                let _ = session.geolocated(view, result);
            }
            Event::ClearSlot(slot) => session.set_point(view, slot, None, None),
            Event::ModeSelected(mode) => session.select_mode(view, mode),
            Event::FindRoute => {
                if let Some((ticket, query)) = session.begin_route(view) {
                    let backend = self.backend.clone();
                    post(&self.tx, async move {
                        let result = backend.route(&query).await;
                        Event::RouteFinished { ticket, result }
                    });
                }
            }
            Event::RouteFinished { ticket, result } => {
                let outcome = session.finish_route(view, ticket, result);
                debug!(?outcome, "route request finished");
            }
            Event::ToggleSatellite => {
                session.toggle_tiles(view);
            }
            Event::ToggleTilt => {
                session.toggle_tilt(view);
            }
            Event::BoundsLoaded(result) => session.apply_bounds(view, result),
            Event::StationsLoaded(result) => session.show_stations(view, result),
            Event::ChargersLoaded(result) => session.show_chargers(view, result),
            Event::Shutdown => return Flow::Stop,
        }

        Flow::Continue
    }

    /// Wait for the next event and apply it.
    pub async fn step(&mut self) -> Flow {
        match self.rx.recv().await {
            Some(event) => self.handle(event),
            None => Flow::Stop,
        }
    }

    /// Run until shutdown, then remove everything the session drew.
    pub async fn run(mut self) -> V {
        self.start();
        info!("client started");

        while self.step().await == Flow::Continue {}

        self.session.teardown(&mut self.view);
        info!("client stopped");
        self.view
    }
}

/// Run `task` on the runtime and post its event back to the loop.
fn post<F>(tx: &mpsc::UnboundedSender<Event>, task: F)
where
    F: Future<Output = Event> + Send + 'static,
{
    let tx = tx.clone();
    tokio::spawn(async move {
        // The receiver only goes away once the loop has stopped.
        let _ = tx.send(task.await);
    });
}
