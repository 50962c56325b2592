//! Client configuration.
//!
//! Every knob has a default matching the deployed planner; `from_env`
//! applies the few overrides a host is expected to change.

use std::time::Duration;

use crate::domain::GeoPoint;

/// Default routing backend (the planner's own API server).
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Default place-search provider.
const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Locality appended to every place query.
const DEFAULT_LOCALITY: &str = "Hyderabad, India";

/// Configuration for the routing backend client.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL, without trailing slash
    pub base_url: String,
    /// Request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl BackendConfig {
    /// Create a config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

/// Configuration for the place-search client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL for the Nominatim-compatible API
    pub base_url: String,
    /// User-Agent sent with every request (required by Nominatim policy)
    pub user_agent: String,
    /// Text appended to every query to keep results local
    pub locality: String,
    /// Maximum results requested from the provider
    pub max_results: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocoderConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the locality qualifier.
    pub fn with_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = locality.into();
        self
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GEOCODER_URL.to_string(),
            user_agent: "HyderaNav-2025".to_string(),
            locality: DEFAULT_LOCALITY.to_string(),
            max_results: 5,
            timeout_secs: 10,
        }
    }
}

/// Search field behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Queries shorter than this (in characters) never reach the provider.
    pub min_query_chars: usize,
    /// Quiet period after the last keystroke before a lookup is sent.
    pub debounce: Duration,
    /// Maximum suggestions shown in one list.
    pub max_suggestions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: 3,
            debounce: Duration::from_millis(600),
            max_suggestions: 5,
        }
    }
}

/// Map presentation settings.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Where the map opens before the region is known.
    pub initial_center: GeoPoint,
    pub initial_zoom: u8,
    /// Zoom used when a named place is selected.
    pub focus_zoom: u8,
    /// Margin in degrees added around the backend's region.
    pub bounds_padding_deg: f64,
    /// Pixel padding when fitting the view to a drawn route.
    pub fit_padding_px: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            initial_center: GeoPoint::HYDERABAD,
            initial_zoom: 13,
            focus_zoom: 15,
            bounds_padding_deg: 0.01,
            fit_padding_px: 50,
        }
    }
}

/// Complete client configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub backend: BackendConfig,
    pub geocoder: GeocoderConfig,
    pub search: SearchConfig,
    pub map: MapConfig,
}

impl ClientConfig {
    /// Defaults, overridden by `TRIP_BACKEND_URL`, `TRIP_GEOCODER_URL` and
    /// `TRIP_LOCALITY` where set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("TRIP_BACKEND_URL").filter(|v| !v.is_empty()) {
            config.backend = BackendConfig::new(url);
        }
        if let Some(url) = lookup("TRIP_GEOCODER_URL").filter(|v| !v.is_empty()) {
            config.geocoder = config.geocoder.with_base_url(url);
        }
        if let Some(locality) = lookup("TRIP_LOCALITY").filter(|v| !v.is_empty()) {
            config.geocoder = config.geocoder.with_locality(locality);
        }

        config
    }
}
