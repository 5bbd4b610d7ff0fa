//! In-memory user store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use friendgraph_core::{UserId, Username};

use super::{StoreError, UserStore};
use crate::models::User;

/// In-memory implementation of [`UserStore`].
///
/// The map is owned by the store instance and injected where needed - there
/// is no process-wide singleton, so each test can hold its own isolated
/// store. Reads and writes go through an async `RwLock`; individual
/// operations are atomic, but no cross-operation coordination is offered
/// (that is the friendship service's job).
pub struct MemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store pre-provisioned with the given users.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.id.clone(), u)).collect()),
        }
    }

    /// Create a store seeded with the demo data set.
    ///
    /// Four users: `user1` and `user2` with no friends, `user3` and `user4`
    /// already friends with each other. Used by the demo binary and the
    /// end-to-end test suite.
    #[must_use]
    pub fn demo() -> Self {
        Self::with_users(demo_users())
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_by_username(&self, username: &Username) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == *username).cloned())
    }

    async fn get_all_by_id(&self, ids: &[UserId]) -> Result<Vec<User>, StoreError> {
        let users = self.users.read().await;
        Ok(ids.iter().filter_map(|id| users.get(id).cloned()).collect())
    }

    async fn upsert(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }
}

/// The demo data set.
fn demo_users() -> Vec<User> {
    let fixture: [(&str, &str, &[&str]); 4] = [
        ("1", "user1", &[]),
        ("2", "user2", &[]),
        ("3", "user3", &["4"]),
        ("4", "user4", &["3"]),
    ];

    fixture
        .into_iter()
        .map(|(id, username, friends)| User {
            id: UserId::new(id),
            username: Username::parse(username).expect("fixture username is valid"),
            friend_user_ids: friends.iter().map(|f| UserId::new(*f)).collect(),
        })
        .collect()
}
