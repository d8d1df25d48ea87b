//! Evaluation orchestrator: joins the async collaborator fetches and derives
//! the full night report.
//!
//! Scoring before both network fetches have settled is a correctness bug:
//! the score would silently use default inputs. The evaluator therefore
//! awaits both fetches explicitly (`tokio::join!`), each under a bounded
//! timeout, and only then runs the score calculation. A fetch that fails or
//! exceeds the deadline degrades to its safe default instead of blocking the
//! score or leaking a stale value.

use std::sync::Arc;

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::models::{
    BadgedEvent, ConstellationPrediction, GeographicLocation, MoonPhaseResult, NightScore,
    PollutionEstimate, ResolvedPlace, SatellitePass,
};
use crate::providers::{Geocoder, PassProvider, ProviderError};
use crate::services::{
    aggregate_passes, build_event_calendar, calculate_night_score, estimate_moon_phase,
    estimate_pollution, predict_constellation, ScoreInputs,
};

/// Everything the presentation collaborator needs to render the night:
/// score, signals, pass list, and the badged event calendar. Plain data,
/// independent of any rendering technology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightReport {
    /// Display name of the observer's location
    pub place_name: String,
    /// Light pollution estimate for the location
    pub pollution: PollutionEstimate,
    /// Lunar impact at evaluation time
    pub moon: MoonPhaseResult,
    /// Passes as supplied by the pass-prediction collaborator
    pub passes: Vec<SatellitePass>,
    /// Whether any supplied pass is visible tonight
    pub satellite_visible_tonight: bool,
    /// Constellation-train heuristic result
    pub constellation: ConstellationPrediction,
    /// Combined 0-5 star score
    pub score: NightScore,
    /// Chronologically ordered, badge-annotated event calendar
    pub events: Vec<BadgedEvent>,
    /// URL for the light-pollution map collaborator (write-only)
    pub light_map_url: String,
}

/// Settled collaborator results for one evaluation cycle.
///
/// Rebuilt wholesale on every call; nothing here survives a location change,
/// which rules out stale-flag bugs when switching locations.
struct EvaluationContext {
    now: DateTime<Utc>,
    location: GeographicLocation,
    place: ResolvedPlace,
    passes: Vec<SatellitePass>,
}

/// Orchestrates one "how good is tonight" evaluation.
#[derive(Clone)]
pub struct NightEvaluator {
    geocoder: Arc<dyn Geocoder>,
    pass_provider: Arc<dyn PassProvider>,
    config: EngineConfig,
}

impl NightEvaluator {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        pass_provider: Arc<dyn PassProvider>,
        config: EngineConfig,
    ) -> Self {
        Self {
            geocoder,
            pass_provider,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate the coming night for a location, using the wall clock.
    pub async fn evaluate_now(&self, location: GeographicLocation) -> NightReport {
        self.evaluate(location, Utc::now()).await
    }

    /// Evaluate the coming night for a location at a fixed instant.
    ///
    /// Geocoding and the pass fetch run concurrently, each bounded by the
    /// configured timeout. The score is computed only after both have settled
    /// (successfully or via their fallback defaults).
    pub async fn evaluate(&self, location: GeographicLocation, now: DateTime<Utc>) -> NightReport {
        let geocode = timeout(self.config.fetch_timeout, self.geocoder.reverse(location));
        let fetch_passes = timeout(
            self.config.fetch_timeout,
            self.pass_provider.upcoming_passes(location),
        );
        let (place_result, passes_result) = tokio::join!(geocode, fetch_passes);

        let place = match place_result {
            Ok(Ok(place)) => place,
            Ok(Err(e)) => {
                warn!(error = %e, "geocoding failed, falling back to rural classification");
                ResolvedPlace::fallback(&self.config.fallback_place_name)
            }
            Err(_) => {
                warn!("geocoding timed out, falling back to rural classification");
                ResolvedPlace::fallback(&self.config.fallback_place_name)
            }
        };

        // A failed or timed-out fetch yields an empty list, never a stale one.
        let passes = match passes_result {
            Ok(Ok(passes)) => passes,
            Ok(Err(e)) => {
                warn!(error = %e, "pass fetch failed, assuming no visible passes");
                Vec::new()
            }
            Err(_) => {
                warn!("pass fetch timed out, assuming no visible passes");
                Vec::new()
            }
        };

        let context = EvaluationContext {
            now,
            location,
            place,
            passes,
        };
        self.derive_report(context)
    }

    /// Derive the full report from settled inputs. Pure, synchronous.
    fn derive_report(&self, context: EvaluationContext) -> NightReport {
        let pollution = estimate_pollution(context.place.classification);
        let moon = estimate_moon_phase(context.now);
        let aggregate = aggregate_passes(&context.passes);
        let constellation = predict_constellation(context.now.hour(), pollution.level);

        let score = calculate_night_score(ScoreInputs {
            moon_impact_score: moon.impact_score,
            pollution_level: pollution.level,
            satellite_visible_tonight: aggregate.any_visible_tonight,
            constellation_predicted_visible: constellation.predicted_visible,
        });
        debug!(
            raw = score.raw_score,
            stars = score.star_rating,
            place = %context.place.display_name,
            "night score computed"
        );

        let events = build_event_calendar(context.now.date_naive());

        NightReport {
            place_name: context.place.display_name,
            pollution,
            moon,
            passes: context.passes,
            satellite_visible_tonight: aggregate.any_visible_tonight,
            constellation,
            score,
            events,
            light_map_url: light_map_url(context.location),
        }
    }
}

/// URL consumed by the light-pollution map collaborator for this location.
pub fn light_map_url(location: GeographicLocation) -> String {
    format!(
        "https://www.lightpollutionmap.info/#zoom=8&lat={}&lon={}&layers=B0FFFFFFFTFFFFFFFFFF",
        location.latitude, location.longitude
    )
}
