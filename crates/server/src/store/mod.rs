//! Storage access for user records.
//!
//! The [`UserStore`] trait is the seam between the friendship service and
//! whatever holds the user records. The service never interprets storage
//! errors; it either propagates them or (for friendship writes) logs and
//! swallows them.
//!
//! [`MemoryUserStore`] is the only implementation in this repository. A
//! database-backed implementation can be swapped in without touching the
//! service layer.

pub mod memory;

pub use memory::MemoryUserStore;

use async_trait::async_trait;
use thiserror::Error;

use friendgraph_core::{UserId, Username};

use crate::models::User;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend failed to execute the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Data access contract for user records.
///
/// Implementations hold no business rules: no friendship validation, no
/// symmetry bookkeeping. That all lives in the friendship service.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get a user by username.
    ///
    /// Returns at most one match. Behavior is unspecified if multiple
    /// records share a username; unique usernames are a data-integrity
    /// precondition of the backend.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails.
    async fn get_by_username(&self, username: &Username) -> Result<Option<User>, StoreError>;

    /// Get all users matching the given IDs.
    ///
    /// Returns only the users found, silently omitting unknown IDs. The
    /// caller must detect omissions if it needs them.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails.
    async fn get_all_by_id(&self, ids: &[UserId]) -> Result<Vec<User>, StoreError>;

    /// Insert or replace a user record, keyed by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails.
    async fn upsert(&self, user: &User) -> Result<(), StoreError>;
}
