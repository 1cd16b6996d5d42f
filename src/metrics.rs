//! Prometheus metrics for request counts and latency.
//!
//! Recording goes through the `metrics` facade and is a no-op until
//! [`install_exporter`] installs a recorder. The exporter serves its scrape
//! endpoint on its own port so the handler port keeps only the function
//! routes.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::{debug, info};

use crate::error::Result;

// === Metric Name Constants ===

/// HTTP requests counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// HTTP request latency metric name.
pub const METRIC_HTTP_REQUEST_LATENCY: &str = "http_request_latency_ms";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_HTTP_REQUESTS,
        "Total number of HTTP requests answered"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        Unit::Milliseconds,
        "HTTP request latency in milliseconds"
    );

    debug!("Metrics initialized");
}

/// Install the Prometheus recorder and its HTTP scrape listener.
pub fn install_exporter(port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    info!("Prometheus exporter listening on {}", addr);
    Ok(())
}

/// Increment the request counter.
pub fn inc_http_requests(route: &str, method: &str, status: u16) {
    counter!(
        METRIC_HTTP_REQUESTS,
        "route" => route.to_string(),
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record request latency.
pub fn record_http_latency(start: Instant, route: &str, method: &str) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(
        METRIC_HTTP_REQUEST_LATENCY,
        "route" => route.to_string(),
        "method" => method.to_string()
    )
    .record(latency_ms);
}

/// RAII guard for timing a request.
/// Records latency when dropped, so panicking handlers are still measured.
pub struct LatencyTimer {
    start: Instant,
    route: String,
    method: String,
}

impl LatencyTimer {
    /// Start timing a request on `route` with `method`.
    pub fn new(route: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            route: route.into(),
            method: method.into(),
        }
    }

    /// Get elapsed time in milliseconds (without recording).
    #[cfg(test)]
    fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for LatencyTimer {
    fn drop(&mut self) {
        record_http_latency(self.start, &self.route, &self.method);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn latency_timer_measures_time() {
        let timer = LatencyTimer::new("/hello-go", "GET");
        sleep(Duration::from_millis(10));
        let elapsed = timer.elapsed_ms();
        assert!(elapsed >= 9.0); // Allow some tolerance
    }
}
