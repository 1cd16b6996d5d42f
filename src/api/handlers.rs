//! HTTP API handlers.
//!
//! Bodies are `&'static str`, which axum answers as
//! `text/plain; charset=utf-8`.

use axum::{http::StatusCode, response::IntoResponse};
use tracing::debug;

/// Path of the greeting function.
pub const HELLO_GO_PATH: &str = "/hello-go";
/// Path of the function exposed under the host's `/api` prefix.
pub const HELLO_API_PATH: &str = "/api/HelloGo";

/// Body of [`HELLO_GO_PATH`].
pub const HELLO_GO_BODY: &str = "Hello Go!";
/// Body of [`HELLO_API_PATH`].
pub const HELLO_API_BODY: &str = "meh!";
/// Body of every 404, for unknown paths and wrong methods alike.
pub const NOT_FOUND_BODY: &str = "404 page not found";

/// Greeting handler.
pub async fn hello_go() -> &'static str {
    debug!("serving {}", HELLO_GO_PATH);
    HELLO_GO_BODY
}

/// `/api/HelloGo` handler.
pub async fn hello_api() -> &'static str {
    debug!("serving {}", HELLO_API_PATH);
    HELLO_API_BODY
}

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn hello_go_returns_greeting() {
        assert_eq!(hello_go().await, "Hello Go!");
    }

    #[tokio::test]
    async fn hello_api_returns_meh() {
        assert_eq!(hello_api().await, "meh!");
    }

    #[tokio::test]
    async fn not_found_is_plain_404() {
        let response = not_found().await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], NOT_FOUND_BODY.as_bytes());
    }
}
