//! Nightwatch HTTP Server Binary
//!
//! Entry point for the nightwatch REST API server. It wires the evaluation
//! engine to its collaborators, sets up the HTTP router, and starts serving
//! requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin nightwatch-server --features http-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `NIGHTWATCH_CONFIG`: Optional path to a TOML engine config file
//! - `FETCH_TIMEOUT_MS`, `DEFAULT_LAT`, `DEFAULT_LON`: engine overrides
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use chrono::{Days, NaiveTime, Utc};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use nightwatch_rust::config::EngineConfig;
use nightwatch_rust::http::{create_router, AppState};
use nightwatch_rust::models::{SatellitePass, SettlementClassification};
use nightwatch_rust::providers::{MemoryFavoriteStore, StaticGeocoder, StaticPassProvider};
use nightwatch_rust::services::NightEvaluator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Nightwatch HTTP Server");

    // Engine configuration: TOML file when pointed at one, env otherwise
    let config = match env::var("NIGHTWATCH_CONFIG") {
        Ok(path) => EngineConfig::from_file(&path)?,
        Err(_) => EngineConfig::from_env(),
    };
    info!(
        timeout_ms = config.fetch_timeout.as_millis() as u64,
        "Engine configured"
    );

    // Development collaborators: fixed geocoding result and sample pass data.
    // A deployment would swap in network-backed implementations here.
    let geocoder = Arc::new(StaticGeocoder::new(
        "Madrid",
        SettlementClassification::City,
    ));
    let passes = Arc::new(StaticPassProvider::new(sample_passes()));
    let evaluator = NightEvaluator::new(geocoder, passes, config);

    // Create application state
    let state = AppState::new(Arc::new(evaluator), Arc::new(MemoryFavoriteStore::new()));

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Sample ISS-style pass data for the development pass provider.
fn sample_passes() -> Vec<SatellitePass> {
    let today = Utc::now().date_naive();
    let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN);

    vec![
        SatellitePass {
            date: today,
            start_time: time(21, 42),
            end_time: time(21, 48),
            max_altitude_deg: 64.0,
            azimuth: "NW to SE".to_string(),
            visible: true,
        },
        SatellitePass {
            date: today.checked_add_days(Days::new(1)).unwrap_or(today),
            start_time: time(13, 5),
            end_time: time(13, 11),
            max_altitude_deg: 31.0,
            azimuth: "SW to E".to_string(),
            visible: false,
        },
    ]
}
