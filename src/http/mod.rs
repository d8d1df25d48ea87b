//! HTTP server module for the nightwatch backend.
//!
//! Exposes the evaluation engine as a REST API via axum. The handlers are a
//! thin layer over the service and provider modules; all business logic lives
//! there, and all responses are the same plain data types the presentation
//! collaborator consumes.

pub mod dto;

pub mod error;

pub mod handlers;

pub mod router;

pub mod state;

pub use router::create_router;

pub use state::AppState;
