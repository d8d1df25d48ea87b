//! Data Transfer Objects for the HTTP API.
//!
//! The report types are re-exported from the models and services modules
//! since they already derive Serialize/Deserialize; only request shapes and
//! thin response wrappers live here.

use serde::{Deserialize, Serialize};

pub use crate::models::{
    AstronomicalEvent, BadgedEvent, EventBadge, MoonPhaseResult, NightScore, PollutionEstimate,
    SatellitePass,
};
pub use crate::services::NightReport;

/// Query parameters carrying the observer's coordinates.
///
/// Both are optional: when absent the engine's default (manual-mode)
/// coordinates are used.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CoordinatesQuery {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Response for the events endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<BadgedEvent>,
    pub total: usize,
}

/// Response for the passes endpoint: the pass list plus the rendered lines
/// and the aggregated visibility flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassesResponse {
    pub passes: Vec<SatellitePass>,
    /// Display-ready one-line rendering of each pass
    pub rendered: Vec<String>,
    pub any_visible_tonight: bool,
}

/// Response for the favorite-location endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteResponse {
    pub favorite: Option<String>,
}

/// Request body for storing the favorite location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetFavoriteRequest {
    pub name: String,
}
