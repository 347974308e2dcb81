//! The timing accumulator.
//!
//! [`LoadTestResult`] stores raw, mergeable data (counts, a latency sum,
//! min/max, error messages); the derived average is computed once by
//! [`LoadTestResult::finalize`]. `merge` is associative and commutative over
//! everything it touches, so results recorded in arbitrary completion order
//! or across stress rounds combine to the same value.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::probe::ProbeSample;

/// Accumulated outcome of a load- or stress-test run.
///
/// `min_response_time` is `None` until the first sample lands: an empty run
/// has no minimum rather than a zero one. `average_response_time` stays zero
/// until [`finalize`](Self::finalize) and is recomputed from the latency sum,
/// so merging partially-finalized results is lossless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadTestResult {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    /// Running latency sum; the raw input to the average.
    pub total_response_time: Duration,
    pub average_response_time: Duration,
    pub max_response_time: Duration,
    pub min_response_time: Option<Duration>,
    /// Failure messages in completion order.
    pub errors: Vec<String>,
}

impl LoadTestResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Incorporate a single probe invocation.
    pub fn record(&mut self, sample: ProbeSample) {
        self.total_requests += 1;
        match sample.error {
            None => self.successful_requests += 1,
            Some(message) => {
                self.failed_requests += 1;
                self.errors.push(message);
            }
        }
        self.total_response_time += sample.latency;
        self.max_response_time = self.max_response_time.max(sample.latency);
        self.min_response_time = Some(match self.min_response_time {
            Some(min) => min.min(sample.latency),
            None => sample.latency,
        });
    }

    /// Combine another result into this one.
    ///
    /// Counts, sums, extrema, and errors accumulate; `average_response_time`
    /// is left stale until the next [`finalize`](Self::finalize).
    pub fn merge(&mut self, other: Self) {
        self.total_requests += other.total_requests;
        self.successful_requests += other.successful_requests;
        self.failed_requests += other.failed_requests;
        self.total_response_time += other.total_response_time;
        self.max_response_time = self.max_response_time.max(other.max_response_time);
        self.min_response_time = match (self.min_response_time, other.min_response_time) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.errors.extend(other.errors);
    }

    /// Derive the average from the accumulated sum. With no requests the
    /// average remains zero; there is nothing to divide.
    pub fn finalize(&mut self) {
        if self.total_requests > 0 {
            self.average_response_time = self.total_response_time.div_f64(self.total_requests as f64);
        }
    }

    /// Failed fraction of all requests, or `None` when nothing ran yet.
    pub fn failure_rate(&self) -> Option<f64> {
        if self.total_requests == 0 {
            return None;
        }
        Some(self.failed_requests as f64 / self.total_requests as f64)
    }
}

/// Drain probe samples from `rx` into a single accumulator.
///
/// One consumer owns the result for the whole run, so updates are safe no
/// matter how probe completions interleave. Samples are pulled in batches of
/// up to `batch_size` to keep channel wakeups off the hot path. The task
/// finishes when every sender handle has been dropped, which is how the
/// load tester expresses "all in-flight probes have reported".
pub async fn aggregator_task(
    mut rx: mpsc::Receiver<ProbeSample>,
    batch_size: usize,
) -> LoadTestResult {
    let mut result = LoadTestResult::new();
    let mut batch = Vec::new();

    loop {
        // Receive the first sample or end the loop once all senders are gone
        match rx.recv().await {
            Some(sample) => batch.push(sample),
            None => break,
        }

        // Opportunistically drain whatever else is already queued
        while batch.len() < batch_size {
            match rx.try_recv() {
                Ok(sample) => batch.push(sample),
                Err(_) => break,
            }
        }

        for sample in batch.drain(..) {
            result.record(sample);
        }
    }
    result
}
