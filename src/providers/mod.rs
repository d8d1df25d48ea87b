//! Async collaborator interfaces consumed by the evaluation engine.
//!
//! The engine never talks to the network itself. Reverse geocoding and
//! satellite pass prediction are behind the [`Geocoder`] and [`PassProvider`]
//! traits, and the favorite-location store behind [`FavoriteStore`]. The
//! `local` module provides in-memory implementations for development and
//! testing, in the same spirit as an in-memory repository backend.

pub mod local;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{GeographicLocation, ResolvedPlace, SatellitePass};

pub use local::{MemoryFavoriteStore, StaticGeocoder, StaticPassProvider};

/// Errors a collaborator can surface to the orchestration boundary.
///
/// These never propagate past the evaluator: each one is translated into a
/// safe default (darkest settlement bucket, empty pass list) so the night
/// score is always computable.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Transport-level failure reaching the collaborator
    #[error("network error: {0}")]
    Network(String),
    /// Collaborator responded with data the client could not interpret
    #[error("failed to parse collaborator response: {0}")]
    Parse(String),
    /// Collaborator responded but had nothing for this location
    #[error("no data available for this location")]
    NoData,
}

/// Reverse-geocoding collaborator: resolves coordinates to a display name and
/// settlement classification.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn reverse(&self, location: GeographicLocation) -> Result<ResolvedPlace, ProviderError>;
}

/// Satellite pass-prediction collaborator: returns the ordered list of
/// upcoming passes for a location's current viewing window.
#[async_trait]
pub trait PassProvider: Send + Sync {
    async fn upcoming_passes(
        &self,
        location: GeographicLocation,
    ) -> Result<Vec<SatellitePass>, ProviderError>;
}

/// Key-value persistence collaborator for a single favorite place name.
pub trait FavoriteStore: Send + Sync {
    /// Get the stored favorite place name, if any.
    fn get(&self) -> Option<String>;

    /// Replace the stored favorite place name.
    fn set(&self, name: &str);
}
