//! Exercise the whole harness against the simulated app operations:
//! load-test sign-in and report submission, stress-test map loading until it
//! degrades, then run the accessibility audit.
//!
//! Run with `cargo run --example field_day`; set `RUST_LOG=spillway=debug`
//! for the batch-level trace.

use std::time::Duration;

use spillway::{
    report::{JsonReporter, LoadSummary, StdoutReporter},
    run_load_test, run_stress_test, sim, AccessibilityTester, Reporter, StressConfig, TestConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== load: sign-in ===");
    let login = run_load_test(
        sim::login,
        &TestConfig::builder()
            .duration(Duration::from_secs(10))
            .concurrent_users(10)
            .requests_per_second(5.0)
            .build(),
    )
    .await?;
    StdoutReporter.report(&LoadSummary::from(login)).await?;

    println!("=== load: report submission ===");
    let submission = run_load_test(
        sim::submit_report,
        &TestConfig::builder()
            .duration(Duration::from_secs(10))
            .concurrent_users(5)
            .requests_per_second(2.0)
            .build(),
    )
    .await?;
    StdoutReporter.report(&LoadSummary::from(submission)).await?;

    println!("=== stress: map loading ===");
    let stressed = run_stress_test(
        sim::load_map_data,
        &StressConfig::builder()
            .duration(Duration::from_secs(20))
            .requests_per_second(10.0)
            .max_concurrent_users(64)
            .build(),
    )
    .await?;
    JsonReporter.report(&LoadSummary::from(stressed)).await?;

    println!("=== accessibility audit ===");
    let audit = AccessibilityTester::new().run();
    JsonReporter.report(&audit).await?;

    Ok(())
}
