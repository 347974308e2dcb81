//! Reports and Reporters.
//!
//! A [`Report`] is the processed form of a raw result: pure, serializable
//! data with the derived numbers a human wants to read. A [`Reporter`] is the
//! I/O edge that takes a report somewhere: stdout here; a file, a dashboard,
//! or a CI annotation in a real deployment. Keeping the two apart keeps the
//! measurement path free of side effects.

use std::fmt::Debug;
use std::future::Future;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::aggregate::LoadTestResult;
use crate::audit::AccessibilityTestResult;

/// The processed form of a raw result `S`.
///
/// Implementors define the derivation via `From<S>`; once built, a report is
/// plain data that any [`Reporter`] can consume.
pub trait Report<S>
where
    Self: Send + Sync + Debug + From<S> + Serialize + DeserializeOwned,
{
}

/// Consumes a [`Report`] and performs side effects: displaying it, sending
/// it to a service, persisting it somewhere.
pub trait Reporter<S, R: Report<S>> {
    fn report(&self, report: &R) -> impl Future<Output = Result<(), Box<dyn std::error::Error>>>;
}

/// Human-oriented summary of a load- or stress-test run.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoadSummary {
    pub total_requests: u64,
    /// Percentage of requests that succeeded.
    pub success_ratio: f64,
    pub failure_rate: f64,
    pub average_response_ms: f64,
    pub min_response_ms: Option<f64>,
    pub max_response_ms: f64,
    pub error_count: usize,
}

impl From<LoadTestResult> for LoadSummary {
    fn from(result: LoadTestResult) -> Self {
        let success_ratio = if result.total_requests > 0 {
            result.successful_requests as f64 / result.total_requests as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total_requests: result.total_requests,
            success_ratio,
            failure_rate: result.failure_rate().unwrap_or(0.0),
            average_response_ms: result.average_response_time.as_secs_f64() * 1000.0,
            min_response_ms: result
                .min_response_time
                .map(|min| min.as_secs_f64() * 1000.0),
            max_response_ms: result.max_response_time.as_secs_f64() * 1000.0,
            error_count: result.errors.len(),
        }
    }
}

impl Report<LoadTestResult> for LoadSummary {}

// The audit result is already its own presentation: findings, score, summary.
impl Report<AccessibilityTestResult> for AccessibilityTestResult {}

/// Pretty-prints reports to stdout.
pub struct StdoutReporter;

impl<S, R: Report<S>> Reporter<S, R> for StdoutReporter {
    async fn report(&self, report: &R) -> Result<(), Box<dyn std::error::Error>> {
        println!("{report:#?}");
        Ok(())
    }
}

/// Writes reports to stdout as JSON lines.
pub struct JsonReporter;

impl<S, R: Report<S>> Reporter<S, R> for JsonReporter {
    async fn report(&self, report: &R) -> Result<(), Box<dyn std::error::Error>> {
        println!("{}", serde_json::to_string(report)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeSample;
    use std::time::Duration;

    #[test]
    fn summary_derives_ratios_and_millis() {
        let mut result = LoadTestResult::new();
        result.record(ProbeSample::success(Duration::from_millis(100)));
        result.record(ProbeSample::success(Duration::from_millis(300)));
        result.record(ProbeSample::failure(Duration::from_millis(200), "nope"));
        result.finalize();

        let summary = LoadSummary::from(result);
        assert_eq!(summary.total_requests, 3);
        assert_eq!(summary.success_ratio, 2.0 / 3.0 * 100.0);
        assert_eq!(summary.failure_rate, 1.0 / 3.0);
        assert_eq!(summary.average_response_ms, 200.0);
        assert_eq!(summary.min_response_ms, Some(100.0));
        assert_eq!(summary.max_response_ms, 300.0);
        assert_eq!(summary.error_count, 1);
    }

    #[test]
    fn empty_run_summarizes_without_dividing() {
        let summary = LoadSummary::from(LoadTestResult::new());
        assert_eq!(summary.total_requests, 0);
        assert_eq!(summary.success_ratio, 0.0);
        assert_eq!(summary.failure_rate, 0.0);
        assert_eq!(summary.min_response_ms, None);
    }

    #[tokio::test]
    async fn reporters_accept_any_report() {
        let summary = LoadSummary::from(LoadTestResult::new());
        StdoutReporter.report(&summary).await.unwrap();
        JsonReporter.report(&summary).await.unwrap();

        let audit = crate::audit::AccessibilityTester::new().run();
        JsonReporter.report(&audit).await.unwrap();
    }
}
