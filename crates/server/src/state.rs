//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::FriendshipService;
use crate::store::UserStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to the configuration and
/// the friendship service.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    friends: FriendshipService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The store is injected here and owned by the friendship service for
    /// the lifetime of the process; nothing else holds storage access.
    #[must_use]
    pub fn new(config: ServerConfig, store: Arc<dyn UserStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                friends: FriendshipService::new(store),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the friendship service.
    #[must_use]
    pub fn friends(&self) -> &FriendshipService {
        &self.inner.friends
    }
}
