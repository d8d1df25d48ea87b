//! Observer location and settlement classification types.

use serde::{Deserialize, Serialize};

/// Geographic location of the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicLocation {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl GeographicLocation {
    /// Create a new geographic location.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether latitude and longitude fall within their valid ranges.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Settlement classification of the observer's surroundings.
///
/// Derived by the geocoding collaborator from raw address data. Anything the
/// collaborator cannot classify maps to `Rural`, the darkest bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementClassification {
    City,
    Town,
    Village,
    #[default]
    Rural,
}

impl SettlementClassification {
    /// Classify from an address-kind keyword as reported by a reverse-geocoding
    /// service. Unrecognized or missing keywords default to `Rural`.
    pub fn from_keyword(keyword: Option<&str>) -> Self {
        match keyword.map(|k| k.to_ascii_lowercase()).as_deref() {
            Some("city") => Self::City,
            Some("town") => Self::Town,
            Some("village") => Self::Village,
            _ => Self::Rural,
        }
    }
}

/// Result of a reverse-geocoding lookup: a display name plus the settlement
/// classification used for the light-pollution estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    /// Human-readable place name for display
    pub display_name: String,
    /// Settlement classification of the surroundings
    pub classification: SettlementClassification,
}

impl ResolvedPlace {
    pub fn new(display_name: impl Into<String>, classification: SettlementClassification) -> Self {
        Self {
            display_name: display_name.into(),
            classification,
        }
    }

    /// Placeholder place used when geocoding fails or times out.
    pub fn fallback(placeholder_name: &str) -> Self {
        Self::new(placeholder_name, SettlementClassification::Rural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_from_keyword() {
        assert_eq!(
            SettlementClassification::from_keyword(Some("city")),
            SettlementClassification::City
        );
        assert_eq!(
            SettlementClassification::from_keyword(Some("Town")),
            SettlementClassification::Town
        );
        assert_eq!(
            SettlementClassification::from_keyword(Some("village")),
            SettlementClassification::Village
        );
        assert_eq!(
            SettlementClassification::from_keyword(Some("hamlet")),
            SettlementClassification::Rural
        );
        assert_eq!(
            SettlementClassification::from_keyword(None),
            SettlementClassification::Rural
        );
    }

    #[test]
    fn test_location_validity() {
        assert!(GeographicLocation::new(40.4168, -3.7038).is_valid());
        assert!(GeographicLocation::new(-90.0, 180.0).is_valid());
        assert!(!GeographicLocation::new(91.0, 0.0).is_valid());
        assert!(!GeographicLocation::new(0.0, -181.0).is_valid());
    }

    #[test]
    fn test_fallback_place_is_rural() {
        let place = ResolvedPlace::fallback("your location");
        assert_eq!(place.classification, SettlementClassification::Rural);
        assert_eq!(place.display_name, "your location");
    }
}
