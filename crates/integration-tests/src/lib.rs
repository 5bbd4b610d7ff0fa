//! Integration tests for FriendGraph.
//!
//! The harness spawns the real application - the same router and middleware
//! stack the binary serves - on an ephemeral local port, backed by a fresh
//! demo-seeded in-memory store. Each test gets its own server, so tests
//! never share state and run in any order.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p friendgraph-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use friendgraph_server::config::ServerConfig;
use friendgraph_server::routes;
use friendgraph_server::state::AppState;
use friendgraph_server::store::MemoryUserStore;

/// A FriendGraph server running in-process on an ephemeral port.
///
/// The server task is aborted when the handle is dropped.
pub struct TestServer {
    base_url: String,
    server: JoinHandle<()>,
}

impl TestServer {
    /// Spawn a server backed by a fresh demo-seeded store.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn spawn() -> Self {
        let config = ServerConfig {
            host: "127.0.0.1".parse().expect("loopback address is valid"),
            port: 0,
        };
        let state = AppState::new(config, Arc::new(MemoryUserStore::demo()));
        let app = routes::app(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to an ephemeral port");
        let addr = listener.local_addr().expect("Listener has a local address");

        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            server,
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.server.abort();
    }
}
