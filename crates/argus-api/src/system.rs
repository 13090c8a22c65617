use axum::Json;

use argus_types::api::{GreetingResponse, HealthResponse};

/// Liveness probe; ignores store state entirely.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn root() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: "Argus backend running!",
    })
}
