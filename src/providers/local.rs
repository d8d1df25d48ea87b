//! In-memory collaborator implementations.
//!
//! These back the development server and the test suite: a geocoder and pass
//! provider with fixed responses, failing and slow variants for exercising the
//! degradation paths, and a memory-backed favorite store.

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{FavoriteStore, Geocoder, PassProvider, ProviderError};
use crate::models::{GeographicLocation, ResolvedPlace, SatellitePass, SettlementClassification};

/// Geocoder that resolves every location to the same place.
#[derive(Debug, Clone)]
pub struct StaticGeocoder {
    place: ResolvedPlace,
}

impl StaticGeocoder {
    pub fn new(display_name: impl Into<String>, classification: SettlementClassification) -> Self {
        Self {
            place: ResolvedPlace::new(display_name, classification),
        }
    }
}

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn reverse(&self, _location: GeographicLocation) -> Result<ResolvedPlace, ProviderError> {
        Ok(self.place.clone())
    }
}

/// Pass provider that returns the same pass list for every location.
#[derive(Debug, Clone, Default)]
pub struct StaticPassProvider {
    passes: Vec<SatellitePass>,
}

impl StaticPassProvider {
    pub fn new(passes: Vec<SatellitePass>) -> Self {
        Self { passes }
    }
}

#[async_trait]
impl PassProvider for StaticPassProvider {
    async fn upcoming_passes(
        &self,
        _location: GeographicLocation,
    ) -> Result<Vec<SatellitePass>, ProviderError> {
        Ok(self.passes.clone())
    }
}

/// Geocoder that always fails with the given error.
#[derive(Debug, Clone)]
pub struct FailingGeocoder {
    error: ProviderError,
}

impl FailingGeocoder {
    pub fn new(error: ProviderError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl Geocoder for FailingGeocoder {
    async fn reverse(&self, _location: GeographicLocation) -> Result<ResolvedPlace, ProviderError> {
        Err(self.error.clone())
    }
}

/// Pass provider that always fails with the given error.
#[derive(Debug, Clone)]
pub struct FailingPassProvider {
    error: ProviderError,
}

impl FailingPassProvider {
    pub fn new(error: ProviderError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl PassProvider for FailingPassProvider {
    async fn upcoming_passes(
        &self,
        _location: GeographicLocation,
    ) -> Result<Vec<SatellitePass>, ProviderError> {
        Err(self.error.clone())
    }
}

/// Pass provider that sleeps before answering, for timeout tests.
#[derive(Debug, Clone)]
pub struct SlowPassProvider {
    delay: Duration,
    passes: Vec<SatellitePass>,
}

impl SlowPassProvider {
    pub fn new(delay: Duration, passes: Vec<SatellitePass>) -> Self {
        Self { delay, passes }
    }
}

#[async_trait]
impl PassProvider for SlowPassProvider {
    async fn upcoming_passes(
        &self,
        _location: GeographicLocation,
    ) -> Result<Vec<SatellitePass>, ProviderError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.passes.clone())
    }
}

/// In-memory favorite-location store.
#[derive(Debug, Default)]
pub struct MemoryFavoriteStore {
    favorite: RwLock<Option<String>>,
}

impl MemoryFavoriteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoriteStore for MemoryFavoriteStore {
    fn get(&self) -> Option<String> {
        self.favorite.read().clone()
    }

    fn set(&self, name: &str) {
        *self.favorite.write() = Some(name.to_string());
    }
}
