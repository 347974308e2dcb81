//! The stress tester.
//!
//! Escalates concurrency 1, 2, 4, 8, … across load-test rounds until the
//! failure rate crosses a threshold or the configured ceiling is passed.
//! Rounds accumulate into one cumulative result through an explicit
//! [`LoadTestResult::merge`], and the stop check reads the *cumulative*
//! failure rate, so a round's failures count against every later round. Product
//! has not decided whether the check should instead look at each round in
//! isolation; until it does, the cumulative read is the contract.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use crate::aggregate::LoadTestResult;
use crate::config::{ConfigError, StressConfig, TestConfig};
use crate::load::run_load_test;

/// Cap on each escalation round, regardless of the configured duration.
pub const MAX_ROUND_DURATION: Duration = Duration::from_secs(30);

/// Escalation stops once the cumulative failure rate exceeds this fraction.
pub const FAILURE_THRESHOLD: f64 = 0.10;

/// Run load-test rounds at doubling concurrency until the system under test
/// degrades or `max_concurrent_users` is passed, returning the cumulative
/// result across all rounds.
///
/// A round that issued no requests (e.g. a zero duration) leaves the failure
/// rate undefined and never stops the escalation on its own.
pub async fn run_stress_test<F, Fut, E>(
    probe: F,
    config: &StressConfig,
) -> Result<LoadTestResult, ConfigError>
where
    F: Fn() -> Fut + Send + Sync + Clone + 'static,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
    E: Display + Send + 'static,
{
    config.validate()?;
    tracing::info!(
        max_concurrent_users = config.max_concurrent_users,
        "starting stress test"
    );

    let mut cumulative = LoadTestResult::new();
    let mut users = 1usize;

    while users <= config.max_concurrent_users {
        tracing::info!(concurrent_users = users, "stress round");
        let round_config = TestConfig {
            duration: config.duration.min(MAX_ROUND_DURATION),
            concurrent_users: users,
            requests_per_second: config.requests_per_second,
        };

        let round = run_load_test(probe.clone(), &round_config).await?;
        cumulative.merge(round);

        if let Some(rate) = cumulative.failure_rate() {
            if rate > FAILURE_THRESHOLD {
                tracing::warn!(
                    concurrent_users = users,
                    failure_rate = rate,
                    "stress limit reached, stopping escalation"
                );
                break;
            }
        }

        users = match users.checked_mul(2) {
            Some(next) => next,
            None => break,
        };
    }

    cumulative.finalize();
    tracing::info!(
        total = cumulative.total_requests,
        failed = cumulative.failed_requests,
        "stress test complete"
    );
    Ok(cumulative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn stress_config(max_users: usize) -> StressConfig {
        StressConfig::builder()
            .duration(Duration::from_secs(1))
            .requests_per_second(10.0)
            .max_concurrent_users(max_users)
            .build()
    }

    /// Probe that records the peak number of simultaneously in-flight calls.
    macro_rules! tracked_probe {
        ($peak:ident) => {{
            let in_flight = Arc::new(AtomicUsize::new(0));
            let peak = $peak.clone();
            move || {
                let in_flight = in_flight.clone();
                let peak = peak.clone();
                async move {
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                    Ok::<(), Infallible>(())
                }
            }
        }};
    }

    #[tokio::test(start_paused = true)]
    async fn escalates_to_the_ceiling_when_healthy() {
        let peak = Arc::new(AtomicUsize::new(0));
        let result = run_stress_test(tracked_probe!(peak), &stress_config(8))
            .await
            .unwrap();

        // Rounds at 1, 2, 4, and 8 users, 10 batches each.
        assert_eq!(result.total_requests, 10 * (1 + 2 + 4 + 8));
        assert_eq!(result.failed_requests, 0);
        assert_eq!(peak.load(Ordering::SeqCst), 8);
    }

    #[tokio::test(start_paused = true)]
    async fn ceiling_between_powers_of_two_is_not_crossed() {
        let peak = Arc::new(AtomicUsize::new(0));
        let result = run_stress_test(tracked_probe!(peak), &stress_config(6))
            .await
            .unwrap();

        // 8 would exceed the ceiling of 6; the ladder stops after 4.
        assert_eq!(result.total_requests, 10 * (1 + 2 + 4));
        assert_eq!(peak.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_after_first_round_when_everything_fails() {
        let result = run_stress_test(
            || async { Err::<(), _>("overloaded") },
            &stress_config(64),
        )
        .await
        .unwrap();

        // Round one at a single user crosses the threshold immediately.
        assert_eq!(result.total_requests, 10);
        assert_eq!(result.failure_rate(), Some(1.0));
    }

    #[tokio::test]
    async fn empty_rounds_never_trip_the_threshold() {
        let config = StressConfig::builder()
            .duration(Duration::ZERO)
            .max_concurrent_users(4)
            .build();
        let result = run_stress_test(|| async { Ok::<(), Infallible>(()) }, &config)
            .await
            .unwrap();

        // Every round issues nothing; the ladder still runs out the ceiling
        // without a divide-by-zero stop.
        assert_eq!(result.total_requests, 0);
        assert_eq!(result.failure_rate(), None);
    }

    #[tokio::test]
    async fn rejects_zero_ceiling_before_probing() {
        let config = StressConfig {
            duration: Duration::from_secs(1),
            requests_per_second: None,
            max_concurrent_users: 0,
        };
        let err = run_stress_test(|| async { Ok::<(), Infallible>(()) }, &config)
            .await
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroCeiling);
    }
}
