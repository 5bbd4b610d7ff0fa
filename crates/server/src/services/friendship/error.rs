//! Friendship error types.

use thiserror::Error;

use friendgraph_core::UserId;

use crate::store::StoreError;

/// Errors that can occur during friendship operations.
///
/// The HTTP adapter pattern-matches these into status codes; the service
/// itself never deals in HTTP concepts.
#[derive(Debug, Error)]
pub enum FriendshipError {
    /// Both sides of the friendship are the same user.
    #[error("both users of the friendship have the same id: {0}")]
    SelfFriendship(UserId),

    /// A referenced id does not resolve to a stored user.
    ///
    /// Carries the offending id for diagnostics; the HTTP layer does not
    /// expose it in the response body.
    #[error("user id={0} does not exist")]
    UserNotFound(UserId),

    /// Storage error during lookup.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
