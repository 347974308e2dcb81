//! The probe contract.
//!
//! A probe is any `Fn() -> Future<Output = Result<(), E>>` where `E` is
//! displayable: a zero-argument async operation against the system under
//! test. `Ok(())` counts as a successful request; `Err` counts as a failed
//! one and its message is captured verbatim in the run result. The harness
//! never enforces a per-call timeout; a probe that wants one must build it
//! in (e.g. `tokio::time::timeout` around its own body).

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

/// A single observed probe invocation: how long it took and, on failure,
/// what went wrong.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeSample {
    pub latency: Duration,
    pub error: Option<String>,
}

impl ProbeSample {
    pub fn success(latency: Duration) -> Self {
        Self {
            latency,
            error: None,
        }
    }

    pub fn failure(latency: Duration, message: impl Into<String>) -> Self {
        Self {
            latency,
            error: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Time one probe invocation and capture its outcome.
pub async fn observe<F, Fut, E>(probe: F) -> ProbeSample
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: Display,
{
    let start = Instant::now();
    let outcome = probe().await;
    let latency = start.elapsed();
    match outcome {
        Ok(()) => ProbeSample::success(latency),
        Err(e) => ProbeSample::failure(latency, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_success() {
        let sample = observe(|| async { Ok::<(), String>(()) }).await;
        assert!(sample.is_success());
        assert_eq!(sample.error, None);
    }

    #[tokio::test]
    async fn captures_failure_text_verbatim() {
        let sample = observe(|| async { Err::<(), _>("connection reset by peer") }).await;
        assert!(!sample.is_success());
        assert_eq!(sample.error.as_deref(), Some("connection reset by peer"));
    }

    #[tokio::test(start_paused = true)]
    async fn measures_latency() {
        let sample = observe(|| async {
            tokio::time::sleep(Duration::from_millis(250)).await;
            Ok::<(), String>(())
        })
        .await;
        assert_eq!(sample.latency, Duration::from_millis(250));
    }
}
