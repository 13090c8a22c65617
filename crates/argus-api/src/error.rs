use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use argus_db::queries::DuplicateUsername;
use argus_types::api::ErrorBody;

/// Every handler failure renders as `(status, {"detail": ...})`, so an error
/// is always distinguishable from success by its HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Username already exists")]
    UsernameTaken,

    #[error("{0}")]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        if err.downcast_ref::<DuplicateUsername>().is_some() {
            ApiError::UsernameTaken
        } else {
            ApiError::Internal(err)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UsernameTaken => StatusCode::BAD_REQUEST,
            ApiError::Internal(err) => {
                error!("request failed: {:#}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
