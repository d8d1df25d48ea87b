//! Secondary-constellation visibility heuristic.
//!
//! Predicts whether a satellite constellation train (e.g. recently launched
//! Starlink batches) might be spotted tonight. This is a coarse rule of thumb,
//! not a physical computation: trains are typically caught in the hours around
//! dusk and dawn, and wash out under heavy light pollution.

use crate::models::ConstellationPrediction;

/// Predict constellation visibility from the hour of day (0-23) and the
/// current pollution level.
///
/// Visible iff the hour falls in the evening/early-morning window
/// (>= 20 or <= 6) and the sky is no brighter than Bortle 7.
pub fn predict_constellation(hour_of_day: u32, pollution_level: u8) -> ConstellationPrediction {
    let night_window = hour_of_day >= 20 || hour_of_day <= 6;
    ConstellationPrediction {
        predicted_visible: night_window && pollution_level <= 7,
    }
}
