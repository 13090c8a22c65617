use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;
use crate::{system, users};

/// The full API surface, minus server-level layers (CORS, tracing), which
/// the binary adds. Tests drive this router directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/users/", post(users::create_user))
        .route("/users/", get(users::list_users))
        .with_state(state)
}
