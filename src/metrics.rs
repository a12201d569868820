//! Prometheus metrics for query latency and outcomes.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use tracing::debug;

// === Metric Name Constants ===

/// Database query latency metric name.
pub const METRIC_QUERY_LATENCY: &str = "db_query_latency_ms";
/// Executed queries counter metric name.
pub const METRIC_QUERIES_EXECUTED: &str = "db_queries_executed_total";
/// Failed queries counter metric name.
pub const METRIC_QUERIES_FAILED: &str = "db_queries_failed_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_QUERY_LATENCY,
        "Database query latency in milliseconds"
    );
    describe_counter!(
        METRIC_QUERIES_EXECUTED,
        "Total number of database queries executed successfully"
    );
    describe_counter!(
        METRIC_QUERIES_FAILED,
        "Total number of database queries that failed"
    );

    debug!("Metrics initialized");
}

/// Record database query latency.
pub fn record_query_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_QUERY_LATENCY).record(latency_ms);
}

/// Increment executed queries counter.
pub fn inc_queries_executed() {
    counter!(METRIC_QUERIES_EXECUTED).increment(1);
}

/// Increment failed queries counter.
pub fn inc_queries_failed() {
    counter!(METRIC_QUERIES_FAILED).increment(1);
}
