//! Session gate scenarios against a mock notes service

#![cfg(not(target_arch = "wasm32"))]

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use notes_frontend_common::auth::{
    AuthGate, AuthorizationState, MemoryTokenStore, TokenKind, TokenStore,
};
use notes_http::client::PublicNotesClient;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token_expiring_at(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(json!({ "user_id": 1, "exp": exp }).to_string());
    format!("{header}.{payload}.sig")
}

fn expired_token() -> String {
    token_expiring_at((Utc::now() - Duration::seconds(1)).timestamp())
}

fn gate(server: &MockServer, store: &MemoryTokenStore) -> AuthGate<MemoryTokenStore> {
    AuthGate::new(store.clone(), PublicNotesClient::new(server.uri()).unwrap())
}

/// Fails the test on drop if any request reaches the server
async fn forbid_requests(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_expired_token_with_successful_refresh_is_authorized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh-token"))
        .and(body_json(json!({ "refreshToken": "refresh-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accessToken": "new" })))
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_tokens(Some(&expired_token()), Some("refresh-1"));
    let mut gate = gate(&server, &store);

    assert_eq!(gate.resolve().await, AuthorizationState::Authorized);
    assert_eq!(store.get(TokenKind::Access).as_deref(), Some("new"));
}

#[tokio::test]
async fn test_no_tokens_is_unauthorized_without_network() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;

    let store = MemoryTokenStore::new();
    assert_eq!(
        gate(&server, &store).resolve().await,
        AuthorizationState::Unauthorized
    );
}

#[tokio::test]
async fn test_malformed_token_is_unauthorized_without_network() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;

    let store = MemoryTokenStore::with_tokens(Some("not-a-jwt"), Some("refresh-1"));
    assert_eq!(
        gate(&server, &store).resolve().await,
        AuthorizationState::Unauthorized
    );
}

#[tokio::test]
async fn test_valid_token_is_authorized_without_network() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;

    let token = token_expiring_at((Utc::now() + Duration::minutes(30)).timestamp());
    let store = MemoryTokenStore::with_tokens(Some(&token), None);
    assert_eq!(
        gate(&server, &store).resolve().await,
        AuthorizationState::Authorized
    );
}

#[tokio::test]
async fn test_expired_token_without_refresh_token_is_unauthorized_without_network() {
    let server = MockServer::start().await;
    forbid_requests(&server).await;

    let store = MemoryTokenStore::with_tokens(Some(&expired_token()), None);
    assert_eq!(
        gate(&server, &store).resolve().await,
        AuthorizationState::Unauthorized
    );
}

#[tokio::test]
async fn test_rejected_refresh_is_unauthorized_and_keeps_refresh_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh-token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "expired" })))
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_tokens(Some(&expired_token()), Some("refresh-1"));
    assert_eq!(
        gate(&server, &store).resolve().await,
        AuthorizationState::Unauthorized
    );
    assert_eq!(store.get(TokenKind::Refresh).as_deref(), Some("refresh-1"));
}

#[tokio::test]
async fn test_unreachable_service_is_unauthorized() {
    let client = PublicNotesClient::new("http://127.0.0.1:9").unwrap();
    let store = MemoryTokenStore::with_tokens(Some(&expired_token()), Some("refresh-1"));

    let mut gate = AuthGate::new(store.clone(), client);
    assert_eq!(gate.resolve().await, AuthorizationState::Unauthorized);
    assert_eq!(store.get(TokenKind::Refresh).as_deref(), Some("refresh-1"));
}
