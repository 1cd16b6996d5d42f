//! Custom handler entry point.

use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use url::Url;

use hello_handler::config::{Config, LogFormat};
use hello_handler::utils::init_tracing;
use hello_handler::{metrics, probe, server};

/// Custom handler for a serverless function host.
#[derive(Parser, Debug)]
#[command(name = "handler")]
#[command(about = "HTTP custom handler answering /hello-go and /api/HelloGo")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Listen port, overriding FUNCTIONS_CUSTOMHANDLER_PORT.
    #[arg(short, long, global = true)]
    port: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the function routes (default).
    Serve,

    /// Print the resolved configuration.
    CheckConfig,

    /// GET a deployed endpoint once and check its status.
    Probe {
        /// Endpoint to probe, e.g. https://<app>.azurewebsites.net/hello-go.
        #[arg(long, env = "URL")]
        url: Url,

        /// Status the endpoint must return.
        #[arg(long, default_value_t = 200)]
        expect_status: u16,

        /// Request timeout in seconds.
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
    },
}

impl Command {
    /// Whether the command reads the handler configuration. `probe` talks to
    /// a remote endpoint and must not fail on local handler settings.
    fn needs_config(&self) -> bool {
        !matches!(self, Command::Probe { .. })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Serve);

    if !command.needs_config() {
        let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        init_tracing(&rust_log, LogFormat::default(), args.verbose);
    }

    match command {
        Command::Probe {
            url,
            expect_status,
            timeout_secs,
        } => cmd_probe(&url, expect_status, timeout_secs).await,
        Command::CheckConfig => {
            let config = load_config(args.port, args.verbose)?;
            cmd_check_config(&config)
        }
        Command::Serve => {
            let config = load_config(args.port, args.verbose)?;
            cmd_serve(&config).await
        }
    }
}

/// Load the configuration, apply `--port` and install tracing from it.
fn load_config(port_override: Option<String>, verbose: bool) -> anyhow::Result<Config> {
    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(port) = port_override {
        config.functions_customhandler_port = Some(port);
    }

    init_tracing(&config.rust_log, config.log_format, verbose);
    Ok(config)
}

/// Serve until the host terminates the process.
async fn cmd_serve(config: &Config) -> anyhow::Result<()> {
    info!("Starting custom handler (v{})", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    metrics::init_metrics();
    if let Some(metrics_port) = config.metrics_port {
        metrics::install_exporter(metrics_port)?;
    }

    server::run(config).await.map_err(|e| {
        error!("Custom handler failed: {}", e);
        e
    })?;

    Ok(())
}

/// Print the resolved configuration.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("CUSTOM HANDLER - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!(
        "  Listen Address: {}{}",
        config.listen_addr(),
        if config.functions_customhandler_port.is_none() {
            " (default port)"
        } else {
            ""
        }
    );
    println!("  Log Filter: {}", config.rust_log);
    println!("  Log Format: {}", config.log_format);
    match config.metrics_port {
        Some(port) => println!("  Metrics: 0.0.0.0:{}", port),
        None => println!("  Metrics: Disabled"),
    }
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Probe a deployed endpoint.
async fn cmd_probe(url: &Url, expect_status: u16, timeout_secs: u64) -> anyhow::Result<()> {
    let report = probe::probe(url, expect_status, Duration::from_secs(timeout_secs)).await?;

    println!(
        "{} -> {} in {:.1}ms",
        url,
        report.status,
        report.latency.as_secs_f64() * 1000.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn endpoint_check_skips_handler_config() {
        let args = parse(&["handler", "probe", "--url", "http://localhost:8080/hello-go"]);
        assert!(!args.command.unwrap().needs_config());
    }

    #[test]
    fn serve_and_check_config_read_handler_config() {
        assert!(parse(&["handler", "serve"]).command.unwrap().needs_config());
        assert!(parse(&["handler", "check-config"]).command.unwrap().needs_config());
    }

    #[test]
    fn bare_invocation_serves_with_port_override() {
        let args = parse(&["handler", "--port", "9001"]);
        assert!(args.command.is_none());
        assert_eq!(args.port.as_deref(), Some("9001"));
    }
}
