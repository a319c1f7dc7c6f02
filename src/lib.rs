//! foxcount library crate
//!
//! Exposes `build_app`, `build_metrics_app`, and `config` for integration
//! tests. The actual binary entrypoint is in `main.rs`.

pub mod config;
pub mod counter;
mod error;
mod routes;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use counter::FoxCounter;

/// Build the application router: counter status plus the two mutation
/// routes.
///
/// Unmatched paths fall through to axum's default fallback, a body-less
/// 404. Extracted from `main()` so integration tests can construct the
/// app without binding to a TCP port.
pub fn build_app(counter: FoxCounter) -> Router {
    Router::new()
        .route("/", get(routes::status::get))
        .route("/plusone", get(routes::counter::plusone))
        .route("/reset", get(routes::counter::reset))
        .with_state(counter)
        .layer(TraceLayer::new_for_http())
}

/// Build the metrics router. The exposition handler is installed as the
/// fallback so any path and method on the metrics port is answered.
pub fn build_metrics_app(counter: FoxCounter) -> Router {
    Router::new()
        .fallback(routes::metrics::render)
        .with_state(counter)
}
