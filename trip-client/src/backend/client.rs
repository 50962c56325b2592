//! Routing backend HTTP client.

use std::future::Future;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::BackendConfig;
use crate::domain::{Charger, GeoBox, RoutePath, RouteQuery, Station};

use super::convert::{convert_bounds, convert_chargers, convert_path, convert_stations};
use super::error::BackendError;
use super::types::{BoundsResponse, EvsResponse, RouteRequestBody, RouteResponse, StationsResponse};

/// Trait for the routing backend.
///
/// This abstraction lets the event loop be driven by fakes in tests. Calls
/// are spawned onto the runtime, hence the `Clone + Send + 'static` bounds.
pub trait RouteBackend: Clone + Send + Sync + 'static {
    /// Raw extent of the routable graph, `None` if the backend has none.
    fn bounds(&self) -> impl Future<Output = Result<Option<GeoBox>, BackendError>> + Send;

    /// Transit stations for the overlay.
    fn stations(&self) -> impl Future<Output = Result<Vec<Station>, BackendError>> + Send;

    /// EV charging points for the overlay.
    fn chargers(&self) -> impl Future<Output = Result<Vec<Charger>, BackendError>> + Send;

    /// Compute a route. `Ok(None)` means the backend found no route.
    fn route(
        &self,
        query: &RouteQuery,
    ) -> impl Future<Output = Result<Option<RoutePath>, BackendError>> + Send;
}

/// HTTP client for the routing backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new backend client.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url,
        })
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http.get(&url).send().await?;
        read_json(response).await
    }
}

/// Check the status and parse the body of a backend response.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BackendError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| BackendError::Json {
        message: e.to_string(),
    })
}

impl RouteBackend for BackendClient {
    #[instrument(skip(self))]
    async fn bounds(&self) -> Result<Option<GeoBox>, BackendError> {
        let response: BoundsResponse = self.get_json("/bounds").await?;
        Ok(convert_bounds(&response))
    }

    #[instrument(skip(self))]
    async fn stations(&self) -> Result<Vec<Station>, BackendError> {
        let response: StationsResponse = self.get_json("/stations").await?;
        let stations = convert_stations(response);
        debug!(count = stations.len(), "loaded stations");
        Ok(stations)
    }

    #[instrument(skip(self))]
    async fn chargers(&self) -> Result<Vec<Charger>, BackendError> {
        let response: EvsResponse = self.get_json("/evs").await?;
        let chargers = convert_chargers(response);
        debug!(count = chargers.len(), "loaded chargers");
        Ok(chargers)
    }

    #[instrument(skip(self), fields(mode = %query.mode))]
    async fn route(&self, query: &RouteQuery) -> Result<Option<RoutePath>, BackendError> {
        let url = format!("{}/route", self.base_url);
        let body = RouteRequestBody::from(query);

        let response = self.http.post(&url).json(&body).send().await?;
        let response: RouteResponse = read_json(response).await?;

        Ok(convert_path(response))
    }
}
