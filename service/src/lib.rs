//! HTTP transport for folio.
//!
//! - `POST /generate-pdf` takes a JSON array of document nodes and answers with
//!   the rendered PDF as an attachment.
//! - `GET /health` answers `{"status":"ok"}`.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use state::AppState;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_request_bytes();
    Router::new()
        .route("/health", get(api::health_check))
        .route("/generate-pdf", post(api::generate_pdf))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}
