//! Custom handler for a serverless function host.
//!
//! The host launches the binary, hands it a port through
//! `FUNCTIONS_CUSTOMHANDLER_PORT` and forwards HTTP invocations to it. The
//! handler answers two literal GET routes with static text:
//!
//! ```text
//! GET /hello-go      -> 200 "Hello Go!"
//! GET /api/HelloGo   -> 200 "meh!"
//! anything else      -> 404 "404 page not found"
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Routes, handlers and middleware
//! - [`server`]: Binding and serving
//! - [`metrics`]: Request metrics and the Prometheus exporter
//! - [`probe`]: Post-deployment smoke check
//! - [`utils`]: Logging and signal plumbing

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod probe;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{HandlerError, Result};
