//! Service layer: scoring, aggregation, and calendar logic.
//!
//! Each module implements one derivation of the night report; `evaluation`
//! orchestrates the async collaborator fetches and combines the signals.

pub mod constellation;

pub mod evaluation;

pub mod event_calendar;

pub mod light_pollution;

pub mod moon_phase;

pub mod night_score;
pub mod satellite_visibility;

pub use constellation::predict_constellation;
pub use evaluation::{NightEvaluator, NightReport};
pub use event_calendar::build_event_calendar;
pub use light_pollution::estimate_pollution;
pub use moon_phase::estimate_moon_phase;
pub use night_score::{calculate_night_score, ScoreInputs};
pub use satellite_visibility::aggregate_passes;
