//! Unified error types for the custom handler.

use std::io;

use thiserror::Error;

/// Unified error type for the custom handler.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address we tried to bind.
        addr: String,
        /// Underlying socket error.
        #[source]
        source: io::Error,
    },

    /// The server stopped with an error after binding.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),

    /// Prometheus exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// Probe error.
    #[error("probe error: {0}")]
    Probe(#[from] ProbeError),
}

/// Errors raised by the `probe` smoke check.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Request {
        /// Probed URL.
        url: String,
        /// Transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with the wrong status.
    #[error("{url} returned {actual}, expected {expected}")]
    UnexpectedStatus {
        /// Probed URL.
        url: String,
        /// Status we wanted.
        expected: u16,
        /// Status we got.
        actual: u16,
    },
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, HandlerError>;
