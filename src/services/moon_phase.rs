//! Lunar phase impact estimation.
//!
//! The phase is derived from the elapsed time since a fixed reference new moon
//! (2000-01-06 18:14 UTC), taken modulo the synodic month. This is an
//! approximation good to a few hours over decades, which is plenty for a
//! coarse three-level impact score.

use chrono::{DateTime, Utc};

use crate::models::MoonPhaseResult;

/// Length of the synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.53;

/// Reference new moon: 2000-01-06 18:14:00 UTC, as a Unix timestamp.
const NEW_MOON_EPOCH_UNIX: i64 = 947_182_440;

fn new_moon_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(NEW_MOON_EPOCH_UNIX, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Days into the current synodic month at the given instant, in [0, 29.53).
///
/// Uses `rem_euclid`, so instants before the reference epoch still map into
/// the canonical range.
pub fn phase_day(now: DateTime<Utc>) -> f64 {
    let elapsed_days = (now - new_moon_epoch()).num_seconds() as f64 / 86_400.0;
    elapsed_days.rem_euclid(SYNODIC_MONTH_DAYS)
}

/// Estimate the lunar impact on sky darkness at the given instant.
///
/// Step function over the phase day: near new moon (< 1 day) scores 2, the
/// waxing crescent week scores 1, the bright half around full moon scores 0,
/// and the waning half recovers to 1.
pub fn estimate_moon_phase(now: DateTime<Utc>) -> MoonPhaseResult {
    let phase = phase_day(now);

    let (impact_score, label) = if phase < 1.0 {
        (2, "Excellent visibility")
    } else if phase < 7.0 {
        (1, "Good visibility")
    } else if phase < 15.0 {
        (0, "Poor visibility")
    } else {
        (1, "Acceptable visibility")
    };

    MoonPhaseResult {
        impact_score,
        label: label.to_string(),
    }
}
