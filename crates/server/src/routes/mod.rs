//! HTTP route handlers for the FriendGraph server.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health              - Liveness check
//! GET    /users/{username}    - Fetch a user with its friend list
//! POST   /friendship?ids=a,b  - Record a mutual friendship
//! DELETE /friendship?ids=a,b  - Dissolve a friendship
//! ```

pub mod friendship;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/users/{username}", get(users::show))
        .route(
            "/friendship",
            post(friendship::create).delete(friendship::remove),
        )
}

/// Create the complete application, ready to serve.
///
/// Used by `main` and by the integration-test harness so both run the
/// identical router and middleware stack.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
