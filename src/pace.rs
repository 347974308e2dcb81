//! Batch pacing.
//!
//! The load tester releases one *batch* of `concurrent_users` probes per
//! pacing tick, so a configured `requests_per_second` governs batches, not
//! individual calls: the aggregate rate is approximately
//! `concurrent_users * requests_per_second`. This matches how operators have
//! historically read the knob and is deliberate: the pacer is a soft
//! governor, not an exact limiter.

use std::time::Duration;

use tokio::time::Instant;

/// Soft pacing between probe batches.
///
/// The deadline advances by a fixed interval per tick (`next_tick += interval`)
/// rather than restarting from `now`, so scheduling jitter in one tick does
/// not push every later tick back.
#[derive(Debug)]
pub struct Pacer {
    interval: Option<Duration>,
    next_tick: Instant,
}

impl Pacer {
    /// A pacer for the given batch rate. `None` means unpaced: the issuing
    /// loop only yields to the scheduler between batches. The rate must be
    /// positive and finite; [`TestConfig::validate`](crate::TestConfig::validate)
    /// guarantees that for rates arriving through a config.
    pub fn new(requests_per_second: Option<f64>) -> Self {
        Self {
            interval: requests_per_second.map(|rps| Duration::from_secs_f64(1.0 / rps)),
            next_tick: Instant::now(),
        }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Suspend until the next batch may be issued.
    pub async fn pace(&mut self) {
        match self.interval {
            Some(interval) => {
                self.next_tick += interval;
                tokio::time::sleep_until(self.next_tick).await;
            }
            // Unpaced runs still need a suspension point so in-flight
            // probes get polled between batches.
            None => tokio::task::yield_now().await,
        }
    }
}
