//! # Nightwatch Rust Backend
//!
//! Night observation scoring and event scheduling engine.
//!
//! This crate estimates, for a given observer location and moment in time, how
//! favorable the coming night is for naked-eye sky observation, and produces a
//! chronologically ordered calendar of upcoming sky events. The backend exposes
//! the resulting report as plain data and, optionally, over a REST API via Axum.
//!
//! ## Features
//!
//! - **Light Pollution**: Bortle-like severity estimate from a settlement classification
//! - **Moon Phase**: lunar impact on sky darkness from a fixed new-moon epoch
//! - **Satellite Passes**: aggregation of externally supplied visibility windows
//! - **Event Calendar**: recurring astronomical events with "today"/"this week" badging
//! - **Night Score**: all signals combined into a normalized 0-5 star rating
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: domain types shared across services and the API surface
//! - [`providers`]: async collaborator interfaces (geocoding, satellite passes,
//!   favorite store) plus in-memory implementations for development and tests
//! - [`services`]: the scoring, aggregation, and calendar logic, and the
//!   evaluation orchestrator that joins the async inputs
//! - [`config`]: engine configuration from environment variables or a TOML file
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Degradation policy
//!
//! Every derived signal has a safe default: a failed or slow geocoding lookup
//! falls back to the darkest settlement bucket, a failed pass fetch to an empty
//! pass list. The night score is therefore always computable, and collaborator
//! errors never escape the evaluation boundary.

pub mod config;

pub mod models;
pub mod providers;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
