//! Spillway — a small test harness for the leak-reporting stack.
//!
//! Spillway drives caller-supplied asynchronous probes (submit a report, load
//! map data, sign in) under synthetic concurrency and collects timing
//! statistics, escalates load until the system under test degrades, and runs
//! a rule-based accessibility audit. It also owns the marker-color
//! classification shared by the product's home and map views.
//!
//! # Architecture
//!
//! The main building blocks are:
//!
//! - **Probe** ([`probe`]): a caller-supplied zero-argument async operation
//!   returning success or failure. The contract boundary between the harness
//!   and whatever subsystem it measures.
//! - [`LoadTestResult`] ([`aggregate`]): the timing accumulator holding
//!   counts, min/max/average latency, and captured error messages. Mergeable
//!   across runs so multi-round results combine losslessly.
//! - [`run_load_test`] ([`load`]): repeatedly launches batches of concurrent
//!   probe invocations for a fixed wall-clock duration, pacing batches
//!   through a [`pace::Pacer`], and drains in-flight calls before reporting.
//! - [`run_stress_test`] ([`stress`]): doubles concurrency round over round
//!   until the cumulative failure rate crosses a threshold or a ceiling is
//!   reached.
//! - [`AccessibilityTester`] ([`audit`]): a synchronous battery of pluggable
//!   rule checks aggregated into a weighted 0–100 score and summary.
//! - [`marker_color`] ([`marker`]): the pure (severity, status) → color
//!   classification.
//! - [`Report`]/[`Reporter`] ([`report`]): derived summaries and the I/O
//!   edge that prints or serializes them.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use spillway::{run_load_test, TestConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TestConfig::builder()
//!         .duration(Duration::from_secs(5))
//!         .concurrent_users(4)
//!         .requests_per_second(5.0)
//!         .build();
//!
//!     let result = run_load_test(spillway::sim::login, &config).await?;
//!     println!(
//!         "{} requests, {} failed",
//!         result.total_requests, result.failed_requests
//!     );
//!     Ok(())
//! }
//! ```
//!
//! # Design goals
//!
//! - Probe failures are data, never harness errors: the worst outcome of a
//!   run is a result reporting a 100% failure rate.
//! - Aggregation is commutative, so completion order of concurrent probes
//!   never changes a result.
//! - Rule checks, reports, and reporters are replaceable building blocks.

/// Timing accumulator and the channel-draining collector task
pub mod aggregate;
/// Rule-based accessibility audit
pub mod audit;
/// Run configuration and fail-fast validation
pub mod config;
/// Leak-report entities, status buckets, and map filters
pub mod domain;
/// The load tester
pub mod load;
/// Severity/status classification and marker colors
pub mod marker;
/// Batch pacing
pub mod pace;
/// Probe contract and per-invocation samples
pub mod probe;
/// Reports and Reporters
pub mod report;
/// Simulated probes for exercising the harness without a backend
pub mod sim;
/// The stress tester
pub mod stress;

pub use aggregate::LoadTestResult;
pub use audit::{
    AccessibilityIssue, AccessibilityTestResult, AccessibilityTester, IssueKind, IssueSeverity,
    RuleCheck,
};
pub use config::{ConfigError, StressConfig, TestConfig};
pub use domain::{GeoPoint, LeakReport, ReportFilter, StatusCounts};
pub use load::run_load_test;
pub use marker::{marker_color, MarkerColor, ReportStatus, Severity};
pub use probe::ProbeSample;
pub use report::{Report, Reporter};
pub use stress::run_stress_test;
