//! HTTP routes for the user store.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::clients::UserClient;
use crate::domain::{HoursDelta, User, UserCreate, UserPatch};
use crate::user_actor::{UserError, INVALID_HOURS, NAME_REQUIRED};

const INVALID_INPUT: &str = "Invalid input";

/// Create the user routes
pub fn routes() -> Router<UserClient> {
    Router::new()
        .route("/users", get(list_users).post(create_user).delete(clear_users))
        .route(
            "/users/{id}",
            get(get_user).put(rename_user).patch(add_hours).delete(delete_user),
        )
}

/// Unwraps a JSON body, reporting a malformed one as `InvalidInput` with `message`.
fn body<T>(payload: Result<Json<T>, JsonRejection>, message: &str) -> Result<T, UserError> {
    payload
        .map(|Json(value)| value)
        .map_err(|_| UserError::InvalidInput(message.to_string()))
}

/// GET /users - List all users in creation order
async fn list_users(State(client): State<UserClient>) -> Result<Json<Vec<User>>, UserError> {
    client.list_users().await.map(Json)
}

/// GET /users/{id} - Fetch one user
async fn get_user(
    State(client): State<UserClient>,
    Path(id): Path<u64>,
) -> Result<Json<User>, UserError> {
    client.get_user(id).await.map(Json)
}

/// POST /users - Create a user
async fn create_user(
    State(client): State<UserClient>,
    payload: Result<Json<UserCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), UserError> {
    let create = body(payload, NAME_REQUIRED)?;
    let user = client.create_user(create).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/{id} - Rename a user
async fn rename_user(
    State(client): State<UserClient>,
    Path(id): Path<u64>,
    payload: Result<Json<UserPatch>, JsonRejection>,
) -> Result<Json<User>, UserError> {
    let patch = body(payload, INVALID_INPUT)?;
    client.rename_user(id, patch).await.map(Json)
}

/// PATCH /users/{id} - Add hours to a user
async fn add_hours(
    State(client): State<UserClient>,
    Path(id): Path<u64>,
    payload: Result<Json<HoursDelta>, JsonRejection>,
) -> Result<Json<User>, UserError> {
    let delta = body(payload, INVALID_HOURS)?;
    client.add_hours(id, delta).await.map(Json)
}

/// DELETE /users/{id} - Remove a user, returning its last state
async fn delete_user(
    State(client): State<UserClient>,
    Path(id): Path<u64>,
) -> Result<Json<User>, UserError> {
    client.delete_user(id).await.map(Json)
}

/// DELETE /users - Remove every user and restart ids at 1
async fn clear_users(State(client): State<UserClient>) -> Result<Json<Vec<User>>, UserError> {
    client.clear_users().await.map(Json)
}
