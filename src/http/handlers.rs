//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! evaluation engine or the favorite store for the actual work.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use super::dto::{
    CoordinatesQuery, EventsResponse, FavoriteResponse, HealthResponse, MoonPhaseResult,
    NightReport, PassesResponse, SetFavoriteRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::GeographicLocation;
use crate::services::{build_event_calendar, estimate_moon_phase};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Resolve the location from query parameters, falling back to the engine's
/// manual-mode default when absent, and rejecting out-of-range coordinates.
fn resolve_location(state: &AppState, query: &CoordinatesQuery) -> Result<GeographicLocation, AppError> {
    let default = state.evaluator.config().default_location;
    let location = GeographicLocation::new(
        query.lat.unwrap_or(default.latitude),
        query.lon.unwrap_or(default.longitude),
    );
    if !location.is_valid() {
        return Err(AppError::BadRequest(format!(
            "coordinates out of range: lat={}, lon={}",
            location.latitude, location.longitude
        )));
    }
    Ok(location)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

// =============================================================================
// Night Report
// =============================================================================

/// GET /v1/report?lat=..&lon=..
///
/// Full night report: score, signals, pass list, and event calendar.
pub async fn get_report(
    State(state): State<AppState>,
    Query(query): Query<CoordinatesQuery>,
) -> HandlerResult<NightReport> {
    let location = resolve_location(&state, &query)?;
    let report = state.evaluator.evaluate_now(location).await;
    Ok(Json(report))
}

/// GET /v1/moon
///
/// Current lunar impact estimate. Pure function of the clock, no location.
pub async fn get_moon() -> HandlerResult<MoonPhaseResult> {
    Ok(Json(estimate_moon_phase(Utc::now())))
}

/// GET /v1/events
///
/// Badge-annotated event calendar, independent of location.
pub async fn get_events() -> HandlerResult<EventsResponse> {
    let events = build_event_calendar(Utc::now().date_naive());
    let total = events.len();
    Ok(Json(EventsResponse { events, total }))
}

/// GET /v1/passes?lat=..&lon=..
///
/// Upcoming satellite passes and the aggregated visibility flag.
pub async fn get_passes(
    State(state): State<AppState>,
    Query(query): Query<CoordinatesQuery>,
) -> HandlerResult<PassesResponse> {
    let location = resolve_location(&state, &query)?;
    let report = state.evaluator.evaluate_now(location).await;
    let rendered = report.passes.iter().map(|p| p.to_string()).collect();

    Ok(Json(PassesResponse {
        passes: report.passes,
        rendered,
        any_visible_tonight: report.satellite_visible_tonight,
    }))
}

// =============================================================================
// Favorite Location
// =============================================================================

/// GET /v1/favorite
///
/// Stored favorite place name, if any.
pub async fn get_favorite(State(state): State<AppState>) -> HandlerResult<FavoriteResponse> {
    Ok(Json(FavoriteResponse {
        favorite: state.favorites.get(),
    }))
}

/// PUT /v1/favorite
///
/// Replace the stored favorite place name.
pub async fn set_favorite(
    State(state): State<AppState>,
    Json(request): Json<SetFavoriteRequest>,
) -> HandlerResult<FavoriteResponse> {
    if request.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "favorite name must not be empty".to_string(),
        ));
    }
    state.favorites.set(request.name.trim());
    Ok(Json(FavoriteResponse {
        favorite: state.favorites.get(),
    }))
}
