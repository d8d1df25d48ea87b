//! Derived sky-condition signals: light pollution, moon phase, constellation
//! prediction, and the combined night score.

use serde::{Deserialize, Serialize};

/// Bortle-like light pollution estimate for the observer's surroundings.
///
/// Level 1 is the darkest sky, level 9 the brightest. Immutable once computed;
/// a new estimate is derived whenever the location changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutionEstimate {
    /// Bortle-like severity level, 1-9 (lower = darker)
    pub level: u8,
    /// Human-readable description of the sky quality
    pub description: String,
}

impl PollutionEstimate {
    pub fn new(level: u8, description: impl Into<String>) -> Self {
        Self {
            level,
            description: description.into(),
        }
    }
}

/// Lunar-phase impact on sky darkness.
///
/// `impact_score` is 2 near new moon (best), 0 near full moon (worst).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonPhaseResult {
    /// Impact score: 2 = excellent, 1 = acceptable/good, 0 = poor
    pub impact_score: u8,
    /// Descriptive visibility label
    pub label: String,
}

/// Heuristic prediction of secondary-constellation visibility (e.g. a Starlink
/// train after dusk). Not a physical computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstellationPrediction {
    pub predicted_visible: bool,
}

/// Normalized quality score for the coming night.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightScore {
    /// Unnormalized sum of the signal bonuses (0-6)
    pub raw_score: u8,
    /// Star rating, 0-5
    pub star_rating: u8,
    /// Descriptive label for the rating
    pub label: String,
}
