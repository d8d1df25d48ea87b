//! Light pollution estimation from settlement classification.
//!
//! A deterministic, total mapping to a Bortle-like severity level. The scale
//! runs 1 (pristine dark) to 9 (inner-city); only levels 5-8 are reachable
//! here because the classification is the sole input.

use crate::models::{PollutionEstimate, SettlementClassification};

/// Estimate the Bortle-like light pollution level for a settlement
/// classification. Total mapping with no error cases; unclassified
/// surroundings arrive as `Rural` and get the darkest bucket.
pub fn estimate_pollution(classification: SettlementClassification) -> PollutionEstimate {
    match classification {
        SettlementClassification::City => PollutionEstimate::new(8, "Very bright urban sky."),
        SettlementClassification::Town => PollutionEstimate::new(7, "Urban/suburban sky."),
        SettlementClassification::Village => PollutionEstimate::new(6, "Suburban sky."),
        SettlementClassification::Rural => PollutionEstimate::new(5, "Relatively dark sky."),
    }
}
