//! Friendship route handlers.
//!
//! Both endpoints take the affected pair as a comma-separated `ids` query
//! parameter rather than a request body, e.g. `POST /friendship?ids=1,2`.

use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use friendgraph_core::UserId;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Friendship query parameters.
#[derive(Debug, Deserialize)]
pub struct FriendshipQuery {
    /// Comma-separated pair of user ids, e.g. `1,2`.
    pub ids: Option<String>,
}

/// Record a mutual friendship between two users.
///
/// POST /friendship?ids={a},{b}
///
/// Responds 204 with an empty body on success; re-establishing an existing
/// friendship also succeeds.
///
/// # Errors
///
/// Returns 400 for a missing or malformed `ids` pair, 422 for a
/// self-friendship attempt, 404 if either user is unknown.
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Query(query): Query<FriendshipQuery>,
) -> Result<StatusCode> {
    let (user_one, user_two) = parse_id_pair(query.ids.as_deref())?;
    state.friends().set_friendship(&user_one, &user_two).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Dissolve the friendship between two users.
///
/// DELETE /friendship?ids={a},{b}
///
/// Responds 204 with an empty body on success; removing a friendship that
/// never existed also succeeds.
///
/// # Errors
///
/// Returns 400 for a missing or malformed `ids` pair, 404 if either user
/// is unknown.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Query(query): Query<FriendshipQuery>,
) -> Result<StatusCode> {
    let (user_one, user_two) = parse_id_pair(query.ids.as_deref())?;
    state
        .friends()
        .remove_friendship(&user_one, &user_two)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Split the `ids` query parameter into exactly two user ids.
///
/// Only arity is validated here; an empty or otherwise unknown id resolves
/// through the service as not-found.
fn parse_id_pair(raw: Option<&str>) -> Result<(UserId, UserId)> {
    let raw = raw.ok_or_else(|| AppError::BadRequest("missing ids query parameter".to_owned()))?;

    let mut parts = raw.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(one), Some(two), None) => Ok((UserId::from(one), UserId::from(two))),
        _ => Err(AppError::BadRequest(format!(
            "ids must be exactly two comma-separated values, got {raw:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_pair_valid() {
        let (one, two) = parse_id_pair(Some("1,2")).expect("valid pair");
        assert_eq!(one, UserId::new("1"));
        assert_eq!(two, UserId::new("2"));
    }

    #[test]
    fn test_parse_id_pair_missing() {
        assert!(matches!(
            parse_id_pair(None),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_parse_id_pair_wrong_arity() {
        assert!(matches!(
            parse_id_pair(Some("1")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_id_pair(Some("1,2,3")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_parse_id_pair_empty_component_passes_through() {
        // Arity alone is validated; "1," yields an empty second id that
        // later resolves as not-found.
        let (one, two) = parse_id_pair(Some("1,")).expect("arity is two");
        assert_eq!(one, UserId::new("1"));
        assert_eq!(two, UserId::new(""));
    }
}
