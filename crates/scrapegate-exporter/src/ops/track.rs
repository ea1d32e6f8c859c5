//! Request-counting middleware.
//!
//! Layer it on any axum router whose traffic should show up in
//! `http_requests_total`:
//!
//! ```ignore
//! router.layer(axum::middleware::from_fn_with_state(counter, track_requests))
//! ```

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use scrapegate_core::RequestCounter;

/// Route label for requests that matched no route.
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Count the request after the inner service responds.
///
/// The route label is the matched route template (`/items/:id`), never the raw
/// path, so path parameters do not create new series.
pub async fn track_requests(
    State(counter): State<RequestCounter>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned());

    let res = next.run(req).await;

    counter.increment(method.as_str(), &route, res.status().as_str());
    res
}
