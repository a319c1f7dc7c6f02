//! Counter mutation endpoints

use axum::extract::State;

use crate::counter::FoxCounter;

/// GET /plusone - Increment the fox counter by one.
pub async fn plusone(State(counter): State<FoxCounter>) -> &'static str {
    counter.increment();
    "Hi, fox! Fox counter increased by one"
}

/// GET /reset - Reset the fox counter to zero.
pub async fn reset(State(counter): State<FoxCounter>) -> &'static str {
    counter.reset();
    "Fox counter reseted"
}
