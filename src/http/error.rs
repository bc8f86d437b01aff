use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::user_actor::UserError;

const USER_NOT_FOUND: &str = "User not found";

/// Error bodies are plain strings rather than JSON objects.
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            UserError::NotFound(_) => (StatusCode::NOT_FOUND, USER_NOT_FOUND).into_response(),
            UserError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            UserError::ActorCommunicationError(msg) => {
                error!(error = %msg, "User store unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
