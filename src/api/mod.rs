//! HTTP API module: the function routes and their middleware.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
