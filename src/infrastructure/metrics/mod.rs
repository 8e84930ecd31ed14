//! Prometheus Metrics
//!
//! Three collectors, all under the `warehouse_service` namespace:
//! - `http_requests_total{method, path, status}`
//! - `http_request_duration_seconds{method, path}`
//! - `db_query_duration_seconds{operation, table}`, PostgreSQL backend only
//!
//! `path` is the matched route template, so ids never become label values.

use std::time::Instant;

use once_cell::sync::Lazy;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

const NAMESPACE: &str = "warehouse_service";

const HTTP_BUCKETS: [f64; 10] = [0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 5.0];
const QUERY_BUCKETS: [f64; 8] = [0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 2.5];

struct Metrics {
    registry: Registry,
    http_requests: IntCounterVec,
    http_latency: HistogramVec,
    query_latency: HistogramVec,
}

impl Metrics {
    fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let http_requests = IntCounterVec::new(
            Opts::new("http_requests_total", "HTTP requests served").namespace(NAMESPACE),
            &["method", "path", "status"],
        )?;
        let http_latency = histogram(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
            &["method", "path"],
            &HTTP_BUCKETS,
        )?;
        let query_latency = histogram(
            "db_query_duration_seconds",
            "Repository query latency in seconds",
            &["operation", "table"],
            &QUERY_BUCKETS,
        )?;

        registry.register(Box::new(http_requests.clone()))?;
        registry.register(Box::new(http_latency.clone()))?;
        registry.register(Box::new(query_latency.clone()))?;

        Ok(Self {
            registry,
            http_requests,
            http_latency,
            query_latency,
        })
    }
}

fn histogram(name: &str, help: &str, labels: &[&str], buckets: &[f64]) -> prometheus::Result<HistogramVec> {
    HistogramVec::new(
        HistogramOpts::new(name, help)
            .namespace(NAMESPACE)
            .buckets(buckets.to_vec()),
        labels,
    )
}

/// `None` only if the collectors could not be registered; recording is then a no-op.
static METRICS: Lazy<Option<Metrics>> = Lazy::new(|| match Metrics::new() {
    Ok(metrics) => Some(metrics),
    Err(e) => {
        tracing::error!(error = %e, "Failed to register metrics");
        None
    }
});

/// Encode every collector in the Prometheus text format.
pub fn gather_metrics() -> String {
    let Some(metrics) = METRICS.as_ref() else {
        return String::new();
    };

    let mut buffer = Vec::new();
    if let Err(e) = TextEncoder::new().encode(&metrics.registry.gather(), &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    if let Some(metrics) = METRICS.as_ref() {
        let status = status.to_string();
        metrics
            .http_requests
            .with_label_values(&[method, path, status.as_str()])
            .inc();
        metrics
            .http_latency
            .with_label_values(&[method, path])
            .observe(duration_secs);
    }
}

/// Records the lifetime of a repository call when dropped.
pub struct QueryTimer {
    operation: &'static str,
    table: &'static str,
    started: Instant,
}

impl Drop for QueryTimer {
    fn drop(&mut self) {
        if let Some(metrics) = METRICS.as_ref() {
            metrics
                .query_latency
                .with_label_values(&[self.operation, self.table])
                .observe(self.started.elapsed().as_secs_f64());
        }
    }
}

/// Start timing a repository call: `let _timer = time_query("select", "stores");`
pub fn time_query(operation: &'static str, table: &'static str) -> QueryTimer {
    QueryTimer {
        operation,
        table,
        started: Instant::now(),
    }
}
