//! HTTP entry point: bind the host-provided port and serve the router.

use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::create_router;
use crate::config::Config;
use crate::error::{HandlerError, Result};
use crate::utils::shutdown_signal;

/// Bind the listener for `config`.
///
/// The port string is handed to the socket layer untouched, so a malformed
/// or occupied port surfaces here as [`HandlerError::Bind`].
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.listen_addr();
    TcpListener::bind(addr.as_str())
        .await
        .map_err(|source| HandlerError::Bind { addr, source })
}

/// Serve the function routes on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(HandlerError::Serve)
}

/// Bind and serve until the host terminates the process.
pub async fn run(config: &Config) -> Result<()> {
    let listener = bind(config).await?;
    let local_addr = listener.local_addr().map_err(HandlerError::Serve)?;
    info!("Custom handler listening on {}", local_addr);

    serve(listener, shutdown_signal()).await?;

    info!("Custom handler stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_port(port: &str) -> Config {
        Config {
            functions_customhandler_port: Some(port.to_string()),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn bind_uses_configured_port() {
        let listener = bind(&config_with_port("0")).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_unspecified());
    }

    #[tokio::test]
    async fn bind_rejects_malformed_port() {
        let err = bind(&config_with_port("not-a-port")).await.unwrap_err();
        assert!(matches!(err, HandlerError::Bind { ref addr, .. } if addr == "0.0.0.0:not-a-port"));
    }

    #[tokio::test]
    async fn bind_rejects_occupied_port() {
        let first = bind(&config_with_port("0")).await.unwrap();
        let port = first.local_addr().unwrap().port().to_string();

        let err = bind(&config_with_port(&port)).await.unwrap_err();
        assert!(matches!(err, HandlerError::Bind { .. }));
    }
}
