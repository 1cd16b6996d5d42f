//! One-shot smoke check against a deployed handler.

use std::time::{Duration, Instant};

use tracing::{info, instrument, warn};
use url::Url;

use crate::error::ProbeError;

/// Outcome of a successful probe.
#[derive(Debug, Clone, Copy)]
pub struct ProbeReport {
    /// Status returned by the endpoint.
    pub status: u16,
    /// Time until the response head arrived.
    pub latency: Duration,
}

/// `GET url` once and require `expected_status`.
#[instrument(skip(url, timeout), fields(url = %url))]
pub async fn probe(
    url: &Url,
    expected_status: u16,
    timeout: Duration,
) -> Result<ProbeReport, ProbeError> {
    let request_error = |source| ProbeError::Request {
        url: url.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(request_error)?;

    let start = Instant::now();
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(request_error)?;
    let latency = start.elapsed();
    let status = response.status().as_u16();

    if status != expected_status {
        warn!("Probe got {} in {:?}, expected {}", status, latency, expected_status);
        return Err(ProbeError::UnexpectedStatus {
            url: url.to_string(),
            expected: expected_status,
            actual: status,
        });
    }

    info!("Probe got {} in {:?}", status, latency);
    Ok(ProbeReport { status, latency })
}
