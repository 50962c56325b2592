//! Backend wire DTOs.
//!
//! These map directly to the backend's JSON. Fields come from graph
//! queries that return `null` on an empty database, so most are optional.

use serde::{Deserialize, Serialize};

use crate::domain::{RouteQuery, SegmentMode, TravelMode};

/// Response from `GET /bounds`. `bounds` is absent or null when the graph
/// has not been loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct BoundsResponse {
    pub bounds: Option<BoundsDto>,
}

/// Raw extent of the routable graph.
#[derive(Debug, Clone, Deserialize)]
pub struct BoundsDto {
    pub min_lat: Option<f64>,
    pub min_lon: Option<f64>,
    pub max_lat: Option<f64>,
    pub max_lon: Option<f64>,
}

/// Response from `GET /stations`.
#[derive(Debug, Clone, Deserialize)]
pub struct StationsResponse {
    pub stations: Option<Vec<StationDto>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationDto {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub name: Option<String>,
}

/// Response from `GET /evs`.
#[derive(Debug, Clone, Deserialize)]
pub struct EvsResponse {
    pub evs: Option<Vec<EvDto>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvDto {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Charger type (e.g. "CCS2"), often missing
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Body of `POST /route`.
#[derive(Debug, Clone, Serialize)]
pub struct RouteRequestBody {
    pub start_lat: f64,
    pub start_lon: f64,
    pub end_lat: f64,
    pub end_lon: f64,
    pub mode: TravelMode,
}

impl From<&RouteQuery> for RouteRequestBody {
    fn from(query: &RouteQuery) -> Self {
        Self {
            start_lat: query.origin.lat(),
            start_lon: query.origin.lon(),
            end_lat: query.destination.lat(),
            end_lon: query.destination.lon(),
            mode: query.mode,
        }
    }
}

/// Response from `POST /route`.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    pub path: Option<PathDto>,
}

/// A computed path. `total_cost == -1` is the "no route" sentinel.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDto {
    #[serde(default)]
    pub segments: Vec<SegmentDto>,

    /// Elapsed time in seconds
    pub total_cost: Option<f64>,

    /// Length in metres
    pub total_distance: Option<f64>,
}

/// One single-mode leg; coordinates are `[lat, lon]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentDto {
    pub mode: SegmentMode,
    #[serde(default)]
    pub coords: Vec<[f64; 2]>,
}
