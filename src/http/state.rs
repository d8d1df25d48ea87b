//! Application state for the HTTP server.

use std::sync::Arc;

use crate::providers::FavoriteStore;
use crate::services::NightEvaluator;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Evaluation engine with its collaborators
    pub evaluator: Arc<NightEvaluator>,
    /// Favorite-location persistence collaborator
    pub favorites: Arc<dyn FavoriteStore>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(evaluator: Arc<NightEvaluator>, favorites: Arc<dyn FavoriteStore>) -> Self {
        Self {
            evaluator,
            favorites,
        }
    }
}
