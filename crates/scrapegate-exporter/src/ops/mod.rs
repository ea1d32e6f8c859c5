//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `<metrics_path>` : Prometheus text format (default `/metrics`)

pub mod track;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use scrapegate_core::error::Result;
use scrapegate_core::metrics::CONTENT_TYPE;

use crate::app_state::AppState;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    scrape_response(state.registry().render())
}

/// Map a render result onto the scrape response.
pub fn scrape_response(rendered: Result<String>) -> Response {
    match rendered {
        Ok(body) => {
            tracing::debug!(bytes = body.len(), "scrape served");
            (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, code = e.code().as_str(), "metrics render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "metrics render failed").into_response()
        }
    }
}
