//! Request middleware: metrics, panic recovery and tracing.

use axum::{
    extract::{MatchedPath, Request},
    middleware::{self, Next},
    response::Response,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::metrics::{self, LatencyTimer};

/// Label used when the request matched no route.
const UNMATCHED_ROUTE: &str = "unmatched";

/// Count and time every request, labelled by matched route.
pub async fn track_requests(matched: Option<MatchedPath>, req: Request, next: Next) -> Response {
    let route = matched
        .as_ref()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());
    let method = req.method().to_string();

    let _timer = LatencyTimer::new(route.clone(), method.clone());
    let response = next.run(req).await;

    metrics::inc_http_requests(&route, &method, response.status().as_u16());
    response
}

/// Wrap `router` in the standard stack.
///
/// Outermost first: tracing, metrics, panic recovery. Panics therefore show
/// up as 500 in both the trace and the request counter.
pub fn apply(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(track_requests))
        .layer(TraceLayer::new_for_http())
}
