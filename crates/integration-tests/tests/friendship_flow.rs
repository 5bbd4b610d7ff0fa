//! End-to-end tests for the user and friendship endpoints.
//!
//! Every test spawns its own demo-seeded server (user1 and user2 with no
//! friends, user3 and user4 already friends), so state never leaks between
//! tests.

#![allow(clippy::unwrap_used)]

use reqwest::{Client, StatusCode};
use serde_json::Value;

use friendgraph_integration_tests::TestServer;

/// Fetch a user by username, asserting a 200 with a JSON body.
async fn get_user_success(server: &TestServer, client: &Client, username: &str) -> Value {
    let resp = client
        .get(server.url(&format!("/users/{username}")))
        .send()
        .await
        .expect("Failed to fetch user");

    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("User body is valid JSON")
}

fn friend_ids(user: &Value) -> Vec<String> {
    user["friendUserIds"]
        .as_array()
        .expect("friendUserIds is an array")
        .iter()
        .map(|v| v.as_str().expect("friend id is a string").to_owned())
        .collect()
}

// ============================================================================
// User lookup
// ============================================================================

#[tokio::test]
async fn test_fetch_user_by_username() {
    let server = TestServer::spawn().await;
    let client = Client::new();

    let user = get_user_success(&server, &client, "user1").await;
    assert_eq!(user["id"], "1");
    assert_eq!(user["username"], "user1");
    assert_eq!(friend_ids(&user), Vec::<String>::new());
}

#[tokio::test]
async fn test_fetch_unknown_user_returns_404() {
    let server = TestServer::spawn().await;
    let client = Client::new();

    let resp = client
        .get(server.url("/users/nonexistent"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.bytes().await.unwrap().is_empty());
}

// ============================================================================
// Friendship creation - invalid scenarios
// ============================================================================

#[tokio::test]
async fn test_create_friendship_with_unknown_user_returns_404() {
    let server = TestServer::spawn().await;
    let client = Client::new();

    let resp = client
        .post(server.url("/friendship?ids=1,9"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // The known side is left unmutated
    let user1 = get_user_success(&server, &client, "user1").await;
    assert_eq!(friend_ids(&user1), Vec::<String>::new());
}

#[tokio::test]
async fn test_create_friendship_without_ids_returns_400() {
    let server = TestServer::spawn().await;
    let client = Client::new();

    let resp = client.post(server.url("/friendship")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_friendship_with_wrong_arity_returns_400() {
    let server = TestServer::spawn().await;
    let client = Client::new();

    for ids in ["1", "1,2,3", ""] {
        let resp = client
            .post(server.url(&format!("/friendship?ids={ids}")))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "ids={ids:?}");
    }
}

#[tokio::test]
async fn test_create_friendship_with_same_user_returns_422() {
    let server = TestServer::spawn().await;
    let client = Client::new();

    let resp = client
        .post(server.url("/friendship?ids=1,1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ============================================================================
// Friendship creation
// ============================================================================

#[tokio::test]
async fn test_create_friendship_links_both_users() {
    let server = TestServer::spawn().await;
    let client = Client::new();

    // Initially neither user has friends
    let user1 = get_user_success(&server, &client, "user1").await;
    assert_eq!(friend_ids(&user1), Vec::<String>::new());
    let user2 = get_user_success(&server, &client, "user2").await;
    assert_eq!(friend_ids(&user2), Vec::<String>::new());

    let resp = client
        .post(server.url("/friendship?ids=1,2"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.bytes().await.unwrap().is_empty());

    // Both sides now list each other
    let user1 = get_user_success(&server, &client, "user1").await;
    assert_eq!(friend_ids(&user1), vec!["2"]);
    let user2 = get_user_success(&server, &client, "user2").await;
    assert_eq!(friend_ids(&user2), vec!["1"]);
}

#[tokio::test]
async fn test_create_friendship_twice_is_idempotent() {
    let server = TestServer::spawn().await;
    let client = Client::new();

    for _ in 0..2 {
        let resp = client
            .post(server.url("/friendship?ids=1,2"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    let user1 = get_user_success(&server, &client, "user1").await;
    assert_eq!(friend_ids(&user1), vec!["2"]);
    let user2 = get_user_success(&server, &client, "user2").await;
    assert_eq!(friend_ids(&user2), vec!["1"]);
}

// ============================================================================
// Friendship deletion
// ============================================================================

#[tokio::test]
async fn test_delete_friendship_unlinks_both_users() {
    let server = TestServer::spawn().await;
    let client = Client::new();

    // Initially user3 and user4 are friends
    let user3 = get_user_success(&server, &client, "user3").await;
    assert_eq!(friend_ids(&user3), vec!["4"]);
    let user4 = get_user_success(&server, &client, "user4").await;
    assert_eq!(friend_ids(&user4), vec!["3"]);

    let resp = client
        .delete(server.url("/friendship?ids=3,4"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Both sides are now unlinked
    let user3 = get_user_success(&server, &client, "user3").await;
    assert_eq!(friend_ids(&user3), Vec::<String>::new());
    let user4 = get_user_success(&server, &client, "user4").await;
    assert_eq!(friend_ids(&user4), Vec::<String>::new());
}

#[tokio::test]
async fn test_delete_friendship_between_non_friends_is_noop() {
    let server = TestServer::spawn().await;
    let client = Client::new();

    let resp = client
        .delete(server.url("/friendship?ids=1,2"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let user1 = get_user_success(&server, &client, "user1").await;
    assert_eq!(friend_ids(&user1), Vec::<String>::new());
}

#[tokio::test]
async fn test_delete_friendship_with_self_is_allowed() {
    // Asymmetric with creation: deleting a self-"friendship" is a no-op,
    // not a 422.
    let server = TestServer::spawn().await;
    let client = Client::new();

    let resp = client
        .delete(server.url("/friendship?ids=1,1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_friendship_with_unknown_user_returns_404() {
    let server = TestServer::spawn().await;
    let client = Client::new();

    let resp = client
        .delete(server.url("/friendship?ids=3,9"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // user3's friendship with user4 is untouched
    let user3 = get_user_success(&server, &client, "user3").await;
    assert_eq!(friend_ids(&user3), vec!["4"]);
}

#[tokio::test]
async fn test_delete_friendship_without_ids_returns_400() {
    let server = TestServer::spawn().await;
    let client = Client::new();

    let resp = client
        .delete(server.url("/friendship"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
