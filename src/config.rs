//! Application configuration loaded from environment variables.

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::error::HandlerError;

/// Port used when the host does not hand one over.
pub const DEFAULT_PORT: &str = "8080";

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human readable single-line output.
    #[default]
    Text,
    /// One JSON object per line, for log collectors.
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port handed over by the function host. Kept as a string: the bind
    /// decides whether it is usable.
    #[serde(default)]
    pub functions_customhandler_port: Option<String>,

    /// Log filter directive (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log line format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Port for the Prometheus exporter. Disabled when unset.
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            functions_customhandler_port: None,
            rust_log: default_log_level(),
            log_format: LogFormat::default(),
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Effective listen port. Unset and empty both fall back to 8080.
    pub fn port(&self) -> &str {
        match self.functions_customhandler_port.as_deref().map(str::trim) {
            Some(port) if !port.is_empty() => port,
            _ => DEFAULT_PORT,
        }
    }

    /// Address the HTTP entry point binds to.
    ///
    /// IPv4 wildcard only. The function host forwards over IPv4 loopback, so
    /// no `[::]` listener is opened.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port())
    }

    /// Check if the configuration is consistent.
    pub fn validate(&self) -> Result<(), HandlerError> {
        if let (Some(metrics_port), Ok(port)) = (self.metrics_port, self.port().parse::<u16>()) {
            if metrics_port == port {
                return Err(HandlerError::InvalidConfig(format!(
                    "METRICS_PORT must differ from the listen port ({})",
                    port
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_vars(vars: &[(&str, &str)]) -> Config {
        envy::from_iter(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    #[test]
    fn unset_port_defaults_to_8080() {
        let config = from_vars(&[]);

        assert_eq!(config.port(), "8080");
        assert_eq!(config.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn empty_port_defaults_to_8080() {
        let config = from_vars(&[("FUNCTIONS_CUSTOMHANDLER_PORT", "")]);

        assert_eq!(config.port(), "8080");
    }

    #[test]
    fn host_port_is_used_verbatim() {
        let config = from_vars(&[("FUNCTIONS_CUSTOMHANDLER_PORT", "9001")]);

        assert_eq!(config.port(), "9001");
        assert_eq!(config.listen_addr(), "0.0.0.0:9001");
    }

    #[test]
    fn malformed_port_is_not_rejected_before_bind() {
        let config = from_vars(&[("FUNCTIONS_CUSTOMHANDLER_PORT", "not-a-port")]);

        assert_eq!(config.port(), "not-a-port");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_values_are_sensible() {
        let config = from_vars(&[]);

        assert_eq!(config.rust_log, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.metrics_port, None);
    }

    #[test]
    fn log_format_parses_json() {
        let config = from_vars(&[("LOG_FORMAT", "json")]);

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::Json.to_string(), "json");
    }

    #[test]
    fn validate_rejects_metrics_port_clash() {
        let config = Config {
            functions_customhandler_port: Some("9100".to_string()),
            metrics_port: Some(9100),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_separate_metrics_port() {
        let config = Config {
            metrics_port: Some(9100),
            ..Config::default()
        };

        assert!(config.validate().is_ok());
    }
}
