//! User domain type.

use serde::{Deserialize, Serialize};

use friendgraph_core::{UserId, Username};

/// A user record with its confirmed friendships.
///
/// Friendship is stored redundantly on both sides: for any users A and B,
/// `A.friend_user_ids` contains B's id if and only if `B.friend_user_ids`
/// contains A's id. The friendship service is solely responsible for
/// upholding that invariant; the storage layer has no knowledge of it.
///
/// Serialized shape (camelCase on the wire):
/// `{"id": "1", "username": "user1", "friendUserIds": ["2"]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique, stable identifier.
    pub id: UserId,
    /// Unique, human-facing account name.
    pub username: Username,
    /// IDs of mutually-confirmed friends, in confirmation order.
    pub friend_user_ids: Vec<UserId>,
}

impl User {
    /// Create a user with no friends.
    #[must_use]
    pub fn new(id: impl Into<UserId>, username: Username) -> Self {
        Self {
            id: id.into(),
            username,
            friend_user_ids: Vec::new(),
        }
    }

    /// Whether this user's friend list contains `other`.
    #[must_use]
    pub fn is_friend_of(&self, other: &UserId) -> bool {
        self.friend_user_ids.contains(other)
    }
}
