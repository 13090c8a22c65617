use serde::{Deserialize, Serialize};

// -- Users --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
}

/// Outbound user shape. Projects only the public fields of a stored user;
/// `password` and `role` never cross the wire.
#[derive(Debug, Serialize)]
pub struct UserOut {
    pub id: i64,
    pub username: String,
}

// -- Probes --

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
}

/// Error body for every API failure, matching the `{"detail": ...}` shape
/// clients already parse.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
