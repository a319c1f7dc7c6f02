//! Prometheus metrics endpoint

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::counter::FoxCounter;
use crate::error::AppError;

/// Render the counter registry in Prometheus text format. Mounted as the
/// metrics router's fallback, so every path and method on the metrics
/// port is answered.
pub async fn render(State(counter): State<FoxCounter>) -> Result<impl IntoResponse, AppError> {
    let body = counter.render()?;
    Ok(([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body))
}
