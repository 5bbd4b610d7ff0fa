//! Friendship service.
//!
//! Owns all friendship business rules: pair validation, the symmetric
//! friend-list invariant, and the read-modify-write sequence against the
//! user store. The HTTP layer above only translates; the store below only
//! persists.
//!
//! # Consistency
//!
//! Each mutation locks both affected users (in sorted-id order, so two
//! overlapping mutations cannot deadlock) for the duration of its
//! read-modify-write. Without this, concurrent mutations touching the same
//! user could lose updates.
//!
//! The two upserts within one mutation are issued concurrently and both are
//! awaited, but a failed upsert is only logged, never surfaced: the write
//! is best-effort, with no rollback and no partial-failure reporting.

mod error;

pub use error::FriendshipError;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use friendgraph_core::{UserId, Username};

use crate::models::User;
use crate::store::UserStore;

/// Service for user lookup and symmetric friendship management.
///
/// Cheap to share: holds the store behind an `Arc` and is itself kept in
/// the application state.
pub struct FriendshipService {
    store: Arc<dyn UserStore>,
    /// Per-user mutexes serializing read-modify-write sequences.
    ///
    /// Entries accumulate for every id ever touched; records are tiny and
    /// the id space here is small, so no eviction is done.
    user_locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl FriendshipService {
    /// Create a new friendship service on top of the given store.
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Look up a user by username.
    ///
    /// Returns `None` for an unknown username; never treats it as an error.
    ///
    /// # Errors
    ///
    /// Returns `FriendshipError::Store` if the lookup fails.
    pub async fn get_user(&self, username: &Username) -> Result<Option<User>, FriendshipError> {
        Ok(self.store.get_by_username(username).await?)
    }

    /// Record a mutual friendship between two distinct users.
    ///
    /// Idempotent: re-establishing an existing friendship is a no-op, not
    /// an error. Both users' friend lists are updated and persisted
    /// best-effort.
    ///
    /// # Errors
    ///
    /// Returns `FriendshipError::SelfFriendship` if both ids are equal
    /// (state untouched), `FriendshipError::UserNotFound` with the first
    /// missing id if either user does not exist, or
    /// `FriendshipError::Store` if the lookup fails.
    pub async fn set_friendship(
        &self,
        user_id_one: &UserId,
        user_id_two: &UserId,
    ) -> Result<(), FriendshipError> {
        if user_id_one == user_id_two {
            return Err(FriendshipError::SelfFriendship(user_id_one.clone()));
        }

        let _guards = self.lock_pair(user_id_one, user_id_two).await;
        let (mut user_one, mut user_two) = self.load_pair(user_id_one, user_id_two).await?;

        if !user_one.is_friend_of(user_id_two) {
            user_one.friend_user_ids.push(user_id_two.clone());
        }
        if !user_two.is_friend_of(user_id_one) {
            user_two.friend_user_ids.push(user_id_one.clone());
        }

        self.persist_pair(&user_one, &user_two).await;
        Ok(())
    }

    /// Dissolve the friendship between two users.
    ///
    /// Idempotent: removing a friendship that never existed is a no-op.
    /// Unlike [`set_friendship`](Self::set_friendship) there is no self
    /// check; removing a self-"friendship" succeeds as a no-op.
    ///
    /// # Errors
    ///
    /// Returns `FriendshipError::UserNotFound` with the first missing id if
    /// either user does not exist, or `FriendshipError::Store` if the
    /// lookup fails.
    pub async fn remove_friendship(
        &self,
        user_id_one: &UserId,
        user_id_two: &UserId,
    ) -> Result<(), FriendshipError> {
        let _guards = self.lock_pair(user_id_one, user_id_two).await;
        let (mut user_one, mut user_two) = self.load_pair(user_id_one, user_id_two).await?;

        user_one.friend_user_ids.retain(|id| id != user_id_two);
        user_two.friend_user_ids.retain(|id| id != user_id_one);

        self.persist_pair(&user_one, &user_two).await;
        Ok(())
    }

    /// Fetch both users of a pair, reporting the first missing id.
    ///
    /// The store omits unknown ids, so presence is checked here: first
    /// `user_id_one`, then `user_id_two`.
    async fn load_pair(
        &self,
        user_id_one: &UserId,
        user_id_two: &UserId,
    ) -> Result<(User, User), FriendshipError> {
        let users = self
            .store
            .get_all_by_id(&[user_id_one.clone(), user_id_two.clone()])
            .await?;

        let user_one = users
            .iter()
            .find(|u| u.id == *user_id_one)
            .cloned()
            .ok_or_else(|| FriendshipError::UserNotFound(user_id_one.clone()))?;
        let user_two = users
            .iter()
            .find(|u| u.id == *user_id_two)
            .cloned()
            .ok_or_else(|| FriendshipError::UserNotFound(user_id_two.clone()))?;

        Ok((user_one, user_two))
    }

    /// Persist both users of a pair, best-effort.
    ///
    /// Both upserts run concurrently and both are awaited; failures are
    /// logged and swallowed. A failed write can leave the symmetry
    /// invariant broken until the next successful mutation of the pair.
    async fn persist_pair(&self, user_one: &User, user_two: &User) {
        let (result_one, result_two) =
            tokio::join!(self.store.upsert(user_one), self.store.upsert(user_two));

        for (user, result) in [(user_one, result_one), (user_two, result_two)] {
            if let Err(err) = result {
                tracing::warn!(user_id = %user.id, error = %err, "friendship upsert failed");
            }
        }
    }

    /// Acquire the per-user locks for a pair, in sorted-id order.
    ///
    /// Returns owned guards; both locks are held until the guards drop. A
    /// pair of equal ids takes a single lock.
    async fn lock_pair(
        &self,
        user_id_one: &UserId,
        user_id_two: &UserId,
    ) -> Vec<OwnedMutexGuard<()>> {
        let mut ids = [user_id_one, user_id_two];
        ids.sort();
        let count = if user_id_one == user_id_two { 1 } else { 2 };

        let handles: Vec<Arc<Mutex<()>>> = {
            let mut registry = self.user_locks.lock().await;
            ids.iter()
                .take(count)
                .map(|id| Arc::clone(registry.entry((*id).clone()).or_default()))
                .collect()
        };

        let mut guards = Vec::with_capacity(handles.len());
        for handle in handles {
            guards.push(handle.lock_owned().await);
        }
        guards
    }
}
