//! Satellite pass records as supplied by the pass-prediction collaborator.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single predicted visibility window of an orbiting object.
///
/// Passes are supplied pre-computed by an external collaborator; the engine
/// never derives or mutates them, it only aggregates the `visible` flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatellitePass {
    /// Calendar date of the pass
    pub date: NaiveDate,
    /// Start of the visibility window (local time of day)
    pub start_time: NaiveTime,
    /// End of the visibility window (local time of day)
    pub end_time: NaiveTime,
    /// Maximum altitude above the horizon, degrees
    pub max_altitude_deg: f64,
    /// Compass description of where to look, e.g. "NW to SE"
    pub azimuth: String,
    /// Whether the pass is visible to the naked eye
    pub visible: bool,
}

impl fmt::Display for SatellitePass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}, max altitude {:.0}\u{b0}, {} ({})",
            self.date.format("%Y-%m-%d"),
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
            self.max_altitude_deg,
            self.azimuth,
            if self.visible {
                "visible"
            } else {
                "not visible"
            }
        )
    }
}

/// Reduction of a pass list to a single "any visible pass tonight" signal.
///
/// Rebuilt from a reset (false) state on every evaluation so that a failed or
/// empty fetch can never leave a stale positive flag behind.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VisibilityAggregate {
    pub any_visible_tonight: bool,
}
