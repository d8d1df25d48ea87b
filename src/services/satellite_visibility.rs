//! Aggregation of satellite pass lists into a "visible tonight" signal.

use crate::models::{SatellitePass, VisibilityAggregate};

/// Reduce a pass list to a single visibility flag: logical OR over the passes'
/// `visible` fields.
///
/// Starts from a fresh `false` aggregate on every call, so a failed fetch
/// (handled upstream as an empty list) can never leave a stale positive flag.
/// Order-independent by construction.
pub fn aggregate_passes(passes: &[SatellitePass]) -> VisibilityAggregate {
    VisibilityAggregate {
        any_visible_tonight: passes.iter().any(|p| p.visible),
    }
}
