//! User route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use friendgraph_core::Username;

use crate::error::{AppError, Result};
use crate::models::User;
use crate::state::AppState;

/// Fetch a user by username.
///
/// GET /users/{username}
///
/// Returns the user as JSON, including its current friend list.
///
/// # Errors
///
/// Returns 400 for an invalid username and 404 for an unknown one.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<User>> {
    let username = Username::parse(&username)
        .map_err(|e| AppError::BadRequest(format!("invalid username: {e}")))?;

    let user = state
        .friends()
        .get_user(&username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {username}")))?;

    Ok(Json(user))
}
