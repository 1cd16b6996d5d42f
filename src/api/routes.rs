//! HTTP API route definitions.

use axum::{routing::get, Router};

use super::handlers::{hello_api, hello_go, not_found, HELLO_API_PATH, HELLO_GO_PATH};
use super::middleware;

/// Create the handler router with its middleware.
pub fn create_router() -> Router {
    middleware::apply(function_routes())
}

/// Bare function routes.
///
/// Wrong methods on a known path fall through to the same 404 as unknown
/// paths, so the method table never leaks as a 405.
pub fn function_routes() -> Router {
    Router::new()
        .route(HELLO_GO_PATH, get(hello_go).fallback(not_found))
        .route(HELLO_API_PATH, get(hello_api).fallback(not_found))
        .fallback(not_found)
}
