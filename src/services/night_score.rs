//! Combined night-quality score.
//!
//! Folds the moon phase, light pollution, satellite visibility, and
//! constellation prediction into a raw additive score, then normalizes it to
//! a 0-5 star rating with a descriptive label. Must only run once all async
//! inputs have settled; the evaluator enforces that sequencing.

use crate::models::NightScore;

/// Settled inputs for the score calculation. All values are pre-validated by
/// the upstream components, so there are no error cases here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    /// Lunar impact score, 0-2 (2 = near new moon)
    pub moon_impact_score: u8,
    /// Bortle-like pollution level, 1-9
    pub pollution_level: u8,
    /// Any visible satellite pass tonight
    pub satellite_visible_tonight: bool,
    /// Constellation train possibly visible tonight
    pub constellation_predicted_visible: bool,
}

/// Bonus contributed by the light pollution level: 2 below Bortle 7, 1 at
/// exactly 7, nothing for brighter skies. Monotonically non-increasing in the
/// level.
pub fn pollution_bonus(level: u8) -> u8 {
    if level <= 6 {
        2
    } else if level == 7 {
        1
    } else {
        0
    }
}

/// Normalize a raw score to a 0-5 star rating: `clamp(round(raw / 6 * 5), 0, 5)`.
pub fn star_rating(raw_score: u8) -> u8 {
    let stars = (f64::from(raw_score) / 6.0 * 5.0).round();
    stars.clamp(0.0, 5.0) as u8
}

fn star_label(stars: u8) -> &'static str {
    match stars {
        5 => "Excellent night",
        4 => "Good night",
        3 => "Acceptable night",
        2 => "Not recommended",
        _ => "Poor night for observation",
    }
}

/// Calculate the night score from the settled inputs.
pub fn calculate_night_score(inputs: ScoreInputs) -> NightScore {
    let mut raw_score = inputs.moon_impact_score;
    raw_score += pollution_bonus(inputs.pollution_level);
    if inputs.satellite_visible_tonight {
        raw_score += 1;
    }
    if inputs.constellation_predicted_visible {
        raw_score += 1;
    }

    let stars = star_rating(raw_score);
    NightScore {
        raw_score,
        star_rating: stars,
        label: star_label(stars).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pollution_bonus_monotone() {
        let mut previous = u8::MAX;
        for level in 1..=9 {
            let bonus = pollution_bonus(level);
            assert!(
                bonus <= previous,
                "bonus must not increase with pollution level"
            );
            previous = bonus;
        }
        assert_eq!(pollution_bonus(6), 2);
        assert_eq!(pollution_bonus(7), 1);
        assert_eq!(pollution_bonus(8), 0);
    }

    #[test]
    fn test_star_rating_extremes() {
        assert_eq!(star_rating(0), 0);
        assert_eq!(star_rating(6), 5);
        // Out-of-range raw values still clamp to 5 stars.
        assert_eq!(star_rating(9), 5);
    }

    #[test]
    fn test_worst_case_city_full_moon() {
        let score = calculate_night_score(ScoreInputs {
            moon_impact_score: 0,
            pollution_level: 8,
            satellite_visible_tonight: false,
            constellation_predicted_visible: false,
        });
        assert_eq!(score.raw_score, 0);
        assert_eq!(score.star_rating, 0);
        assert_eq!(score.label, "Poor night for observation");
    }

    #[test]
    fn test_best_case_rural_new_moon() {
        let score = calculate_night_score(ScoreInputs {
            moon_impact_score: 2,
            pollution_level: 5,
            satellite_visible_tonight: true,
            constellation_predicted_visible: true,
        });
        assert_eq!(score.raw_score, 6);
        assert_eq!(score.star_rating, 5);
        assert_eq!(score.label, "Excellent night");
    }

    #[test]
    fn test_mid_case_town() {
        // Moon 1 + town bonus 1 + satellite 1 = 3 -> round(3/6*5) = round(2.5) = 3 stars.
        let score = calculate_night_score(ScoreInputs {
            moon_impact_score: 1,
            pollution_level: 7,
            satellite_visible_tonight: true,
            constellation_predicted_visible: false,
        });
        assert_eq!(score.raw_score, 3);
        assert_eq!(score.star_rating, 3);
        assert_eq!(score.label, "Acceptable night");
    }

    #[test]
    fn test_label_table() {
        assert_eq!(star_label(5), "Excellent night");
        assert_eq!(star_label(4), "Good night");
        assert_eq!(star_label(3), "Acceptable night");
        assert_eq!(star_label(2), "Not recommended");
        assert_eq!(star_label(1), "Poor night for observation");
        assert_eq!(star_label(0), "Poor night for observation");
    }
}
