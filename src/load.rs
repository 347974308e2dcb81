//! The load tester.
//!
//! # High-level flow
//! 1. Validate the configuration before anything runs.
//! 2. Spawn the collector task that owns the run's [`LoadTestResult`].
//! 3. Until the wall-clock deadline, launch `concurrent_users` probe tasks
//!    per iteration. Each task times its own call and sends a
//!    [`ProbeSample`](crate::probe::ProbeSample) to the collector as it
//!    completes; completion order is irrelevant because aggregation is
//!    commutative.
//! 4. Pace between batches through a [`Pacer`].
//! 5. After the deadline, stop issuing and *drain*: every in-flight probe is
//!    awaited before the result is finalized. Nothing is cancelled, and no
//!    per-call timeout is imposed, so a hung probe delays the run's end
//!    indefinitely. Callers wanting per-call timeouts build them into the
//!    probe itself.

use std::fmt::Display;
use std::future::Future;

use futures::future::join_all;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::aggregate::{aggregator_task, LoadTestResult};
use crate::config::{ConfigError, TestConfig};
use crate::pace::Pacer;
use crate::probe::observe;

/// Drive `probe` at the configured concurrency and rate for the configured
/// duration, collecting per-call timing into one result.
///
/// A probe returning `Err` is recorded as a failed request with its message
/// captured verbatim; it never aborts the run.
pub async fn run_load_test<F, Fut, E>(
    probe: F,
    config: &TestConfig,
) -> Result<LoadTestResult, ConfigError>
where
    F: Fn() -> Fut + Send + Sync + Clone + 'static,
    Fut: Future<Output = Result<(), E>> + Send + 'static,
    E: Display + Send + 'static,
{
    config.validate()?;
    tracing::info!(
        duration_secs = config.duration.as_secs_f64(),
        concurrent_users = config.concurrent_users,
        requests_per_second = config.requests_per_second,
        "starting load test"
    );

    let (tx, rx) = mpsc::channel(config.concurrent_users * 10);
    let collector = tokio::spawn(aggregator_task(rx, config.concurrent_users * 10));

    let deadline = Instant::now() + config.duration;
    let mut pacer = Pacer::new(config.requests_per_second);
    let mut handles = Vec::new();

    while Instant::now() < deadline {
        for _ in 0..config.concurrent_users {
            let probe = probe.clone();
            let tx = tx.clone();
            handles.push(tokio::spawn(async move {
                let sample = observe(probe).await;
                // The collector outlives every sender; a send can only fail
                // if it panicked, and that surfaces through its join below.
                let _ = tx.send(sample).await;
            }));
        }
        pacer.pace().await;
    }
    drop(tx);

    tracing::debug!(
        issued = handles.len(),
        "deadline reached, draining in-flight probes"
    );
    for joined in join_all(handles).await {
        if let Err(e) = joined {
            tracing::error!("probe task panicked: {e}");
        }
    }

    let mut result = collector.await.expect("sample collector task panicked");
    result.finalize();

    tracing::info!(
        total = result.total_requests,
        failed = result.failed_requests,
        "load test complete"
    );
    Ok(result)
}
