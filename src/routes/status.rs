//! Component status endpoint

use axum::{Json, extract::State};
use serde::Serialize;

use crate::counter::FoxCounter;

/// Status document: each component with its current reading.
#[derive(Serialize)]
pub struct StatusResponse {
    components: Components,
}

#[derive(Serialize)]
struct Components {
    foxes: Foxes,
}

#[derive(Serialize)]
struct Foxes {
    count: u64,
}

/// GET / - Report the current fox count as JSON.
pub async fn get(State(counter): State<FoxCounter>) -> Json<StatusResponse> {
    Json(StatusResponse {
        components: Components {
            foxes: Foxes {
                count: counter.get(),
            },
        },
    })
}
