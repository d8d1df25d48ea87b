//! Astronomical event catalog types and temporal badges.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Coarse visibility rating attached to a catalog event.
///
/// These labels are static per event and not adjusted for the observer's
/// pollution level or latitude. A derived, location-aware rating would replace
/// this at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityLevel {
    High,
    Medium,
    LowToMedium,
    Low,
}

impl fmt::Display for VisibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VisibilityLevel::High => "High",
            VisibilityLevel::Medium => "Medium",
            VisibilityLevel::LowToMedium => "Low to medium",
            VisibilityLevel::Low => "Low",
        };
        f.write_str(s)
    }
}

/// A recurring astronomical event from the static catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstronomicalEvent {
    /// Event title, e.g. "Perseid meteor shower"
    pub title: String,
    /// Display date text, e.g. "August 12-13"
    pub date_text: String,
    /// Display time window, e.g. "02:00-05:00"
    pub time_text: String,
    /// Static visibility rating (see [`VisibilityLevel`])
    pub visibility: VisibilityLevel,
    /// How the moon affects this event
    pub moon_note: String,
    /// Additional observing advice
    pub info_note: String,
    /// Sortable calendar date: fixed month/day anchored to the current year
    pub canonical_date: NaiveDate,
}

impl AstronomicalEvent {
    /// Whether the event carries collapsible detail content (moon note and
    /// observing advice). The presentation layer owns toggle state; the engine
    /// only reports that details exist.
    pub fn has_details(&self) -> bool {
        !self.moon_note.is_empty() || !self.info_note.is_empty()
    }
}

/// Temporal urgency badge attached to an event relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventBadge {
    None,
    Today,
    ThisWeek,
}

/// An event paired with its badge, as handed to the presentation collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgedEvent {
    pub event: AstronomicalEvent,
    pub badge: EventBadge,
}
