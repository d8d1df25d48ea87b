//! Static astronomical event catalog with chronological ordering and badges.
//!
//! The catalog holds five recurring events with approximate, display-oriented
//! dates; it is rebuilt fresh on every evaluation, never fetched or persisted.
//! Each canonical date is anchored to the current year, which can place an
//! event in the past late in the year (kept as-is, see the event catalog notes
//! in DESIGN.md).

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{AstronomicalEvent, BadgedEvent, EventBadge, VisibilityLevel};

/// Inclusive look-ahead window for the "this week" badge, in days.
const THIS_WEEK_DAYS: u64 = 7;

fn fixed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The fixed event catalog anchored to the given year, in declaration order.
fn catalog(year: i32) -> Vec<AstronomicalEvent> {
    vec![
        AstronomicalEvent {
            title: "Perseid meteor shower".to_string(),
            date_text: "August 12-13".to_string(),
            time_text: "02:00-05:00".to_string(),
            visibility: VisibilityLevel::Medium,
            moon_note: "Interferes early on, improves toward dawn".to_string(),
            info_note: "Look toward the northeast".to_string(),
            canonical_date: fixed_date(year, 8, 12),
        },
        AstronomicalEvent {
            title: "Partial lunar eclipse".to_string(),
            date_text: "September 18".to_string(),
            time_text: "21:30-23:00".to_string(),
            visibility: VisibilityLevel::High,
            moon_note: "No impact".to_string(),
            info_note: "Visible to the naked eye".to_string(),
            canonical_date: fixed_date(year, 9, 18),
        },
        AstronomicalEvent {
            title: "Saturn at opposition".to_string(),
            date_text: "September 8".to_string(),
            time_text: "22:00-03:00".to_string(),
            visibility: VisibilityLevel::High,
            moon_note: "Low impact".to_string(),
            info_note: "Best with binoculars or a telescope".to_string(),
            canonical_date: fixed_date(year, 9, 8),
        },
        AstronomicalEvent {
            title: "Comet appearance (estimated)".to_string(),
            date_text: "October".to_string(),
            time_text: "Before dawn".to_string(),
            visibility: VisibilityLevel::LowToMedium,
            moon_note: "Depends on the lunar phase".to_string(),
            info_note: "Look low on the eastern horizon".to_string(),
            canonical_date: fixed_date(year, 10, 10),
        },
        AstronomicalEvent {
            title: "Geminid meteor shower".to_string(),
            date_text: "December 13-14".to_string(),
            time_text: "01:00-06:00".to_string(),
            visibility: VisibilityLevel::High,
            moon_note: "Favorable conditions".to_string(),
            info_note: "One of the best showers of the year".to_string(),
            canonical_date: fixed_date(year, 12, 13),
        },
    ]
}

/// Compute the temporal badge for an event date relative to today.
///
/// `Today` iff the same calendar day; `ThisWeek` iff the date falls within
/// the next seven days inclusive (and is not today).
pub fn badge_for(event_date: NaiveDate, today: NaiveDate) -> EventBadge {
    let week_end = today
        .checked_add_days(Days::new(THIS_WEEK_DAYS))
        .unwrap_or(today);

    if event_date == today {
        EventBadge::Today
    } else if event_date > today && event_date <= week_end {
        EventBadge::ThisWeek
    } else {
        EventBadge::None
    }
}

/// Build the badge-annotated event calendar for the given day.
///
/// The catalog is constructed fresh, stable-sorted ascending by canonical
/// date (ties keep declaration order), and each event is badged relative to
/// `today`.
pub fn build_event_calendar(today: NaiveDate) -> Vec<BadgedEvent> {
    let mut events = catalog(today.year());
    events.sort_by_key(|e| e.canonical_date);

    events
        .into_iter()
        .map(|event| {
            let badge = badge_for(event.canonical_date, today);
            BadgedEvent { event, badge }
        })
        .collect()
}
