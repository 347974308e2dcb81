//! Simulated probes.
//!
//! Stand-ins for the app's real operations, with latency envelopes and
//! failure odds shaped like field measurements. Useful for demos and for
//! exercising the harness end to end without a backend; their jitter makes
//! them unsuitable for exact assertions.

use std::time::Duration;

use thiserror::Error;

/// Failure raised by a simulated operation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct SimError(&'static str);

async fn jittered(
    base_ms: u64,
    spread_ms: u64,
    failure_odds: f64,
    message: &'static str,
) -> Result<(), SimError> {
    let extra = (rand::random::<f64>() * spread_ms as f64) as u64;
    tokio::time::sleep(Duration::from_millis(base_ms + extra)).await;
    if rand::random::<f64>() < failure_odds {
        return Err(SimError(message));
    }
    Ok(())
}

/// Simulated sign-in round trip.
pub async fn login() -> Result<(), SimError> {
    jittered(500, 1000, 0.05, "Login failed").await
}

/// Simulated report submission, image upload included.
pub async fn submit_report() -> Result<(), SimError> {
    jittered(1000, 2000, 0.03, "Report submission failed").await
}

/// Simulated map data fetch.
pub async fn load_map_data() -> Result<(), SimError> {
    jittered(500, 1500, 0.02, "Map data loading failed").await
}

/// Simulated realtime sync tick.
pub async fn realtime_sync() -> Result<(), SimError> {
    jittered(200, 800, 0.01, "Real-time update failed").await
}
