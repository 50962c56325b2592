//! Nominatim place-search client.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::GeocoderConfig;
use crate::domain::{GeoBox, GeoPoint, Suggestion};

use super::error::GeocodeError;

/// A lookup as issued by a search field.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceQuery {
    /// The user's text, without the locality qualifier
    pub text: String,
    /// Region to bias results toward, when known
    pub viewbox: Option<GeoBox>,
}

/// Trait for place-search providers.
pub trait PlaceSearch: Clone + Send + Sync + 'static {
    /// Look up candidate places, best first.
    fn search(
        &self,
        query: &PlaceQuery,
    ) -> impl Future<Output = Result<Vec<Suggestion>, GeocodeError>> + Send;
}

/// Raw Nominatim search result.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
}

/// Nominatim-backed place search.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
    locality: String,
    max_results: usize,
}

impl NominatimClient {
    /// Create a new client.
    pub fn new(config: &GeocoderConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            locality: config.locality.clone(),
            max_results: config.max_results,
        })
    }

    /// Query parameters for a lookup.
    fn params(&self, query: &PlaceQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("format", "json".to_string()),
            ("q", format!("{}, {}", query.text, self.locality)),
            ("limit", self.max_results.to_string()),
        ];

        // Viewbox biases ranking; without `bounded=1` it does not filter.
        if let Some(viewbox) = &query.viewbox {
            params.push(("viewbox", viewbox.to_bbox_string()));
        }

        params
    }
}

impl PlaceSearch for NominatimClient {
    #[instrument(skip(self), fields(text = %query.text))]
    async fn search(&self, query: &PlaceQuery) -> Result<Vec<Suggestion>, GeocodeError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&self.params(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let places: Vec<NominatimPlace> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        let suggestions: Vec<Suggestion> = places
            .iter()
            .take(self.max_results)
            .filter_map(to_suggestion)
            .collect();

        debug!(count = suggestions.len(), "place search returned");
        Ok(suggestions)
    }
}

fn to_suggestion(place: &NominatimPlace) -> Option<Suggestion> {
    let lat: f64 = place.lat.parse().ok()?;
    let lon: f64 = place.lon.parse().ok()?;
    let point = GeoPoint::new(lat, lon).ok()?;
    Some(Suggestion::from_display_name(&place.display_name, point))
}
