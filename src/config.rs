use std::time::Duration;

use thiserror::Error;
use typed_builder::TypedBuilder;

/// Rejected configuration. Raised before any probe executes.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("concurrent_users must be at least 1")]
    ZeroConcurrency,
    #[error("max_concurrent_users must be at least 1")]
    ZeroCeiling,
    #[error("requests_per_second must be positive, got {0}")]
    NonPositiveRate(f64),
}

/// Configuration for a single load-test run.
///
/// `duration` is wall-clock time during which new probe batches are issued;
/// a zero duration is valid and produces an empty result. `concurrent_users`
/// is the number of probe invocations launched per batch.
/// `requests_per_second` paces *batches*, so the aggregate call rate is
/// roughly `concurrent_users * requests_per_second`; see [`crate::pace::Pacer`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct TestConfig {
    pub duration: Duration,
    #[builder(default = 1)]
    pub concurrent_users: usize,
    #[builder(default, setter(strip_option))]
    pub requests_per_second: Option<f64>,
}

impl TestConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrent_users == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }
        validate_rate(self.requests_per_second)
    }
}

/// Configuration for a stress run: the per-round settings plus the
/// concurrency ceiling the escalation will not cross.
#[derive(Debug, Clone, TypedBuilder)]
pub struct StressConfig {
    pub duration: Duration,
    #[builder(default, setter(strip_option))]
    pub requests_per_second: Option<f64>,
    pub max_concurrent_users: usize,
}

impl StressConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_concurrent_users == 0 {
            return Err(ConfigError::ZeroCeiling);
        }
        validate_rate(self.requests_per_second)
    }
}

fn validate_rate(rate: Option<f64>) -> Result<(), ConfigError> {
    match rate {
        // NaN fails the `> 0.0` comparison and is rejected with it.
        Some(rps) if !(rps > 0.0) => Err(ConfigError::NonPositiveRate(rps)),
        _ => Ok(()),
    }
}
