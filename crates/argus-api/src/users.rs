use axum::{Json, extract::State};
use tracing::info;

use argus_db::password;
use argus_types::api::{UserCreate, UserOut};

use crate::error::ApiError;
use crate::state::AppState;

/// Create a user. Uniqueness is enforced by the store's UNIQUE constraint
/// alone; a violation surfaces as a 400 with no row inserted.
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<UserCreate>,
) -> Result<Json<UserOut>, ApiError> {
    let hash = password::hash(&req.password)?;
    let id = state.db.insert_user(&req.username, &hash)?;

    info!("created user {} (id {})", req.username, id);
    Ok(Json(UserOut {
        id,
        username: req.username,
    }))
}

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserOut>>, ApiError> {
    let users = state
        .db
        .list_users()?
        .into_iter()
        .map(|row| UserOut {
            id: row.id,
            username: row.username,
        })
        .collect();

    Ok(Json(users))
}
