//! Integration tests for the notes HTTP client

#![cfg(feature = "client")]

use notes_http::client::{
    AuthenticatedNotesClient, ClientError, PublicNotesClient, TypedClientBuilder,
};
use notes_http::types::{CreateNoteRequest, CredentialsRequest, RefreshTokenRequest};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_client_builder() {
    let client = TypedClientBuilder::new()
        .base_url("http://localhost:8000/")
        .build_public();

    assert!(client.is_ok());
    assert_eq!(client.unwrap().base_url(), "http://localhost:8000");
}

#[tokio::test]
async fn test_client_builder_timeout_bounds_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "accessToken": "late" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(100))
        .build_public()
        .unwrap();

    let result = client
        .refresh_token(RefreshTokenRequest {
            refresh_token: "r-1".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ClientError::Request(ref e)) if e.is_timeout()));
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = TypedClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_login_returns_token_pair() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token/"))
        .and(body_json(json!({ "username": "ada", "password": "hunter2" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access": "a", "refresh": "r" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PublicNotesClient::new(mock_server.uri()).unwrap();
    let pair = client
        .login(CredentialsRequest {
            username: "ada".to_string(),
            password: "hunter2".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(pair.access, "a");
    assert_eq!(pair.refresh, "r");
}

#[tokio::test]
async fn test_register_accepts_created_without_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user/register/"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&mock_server)
        .await;

    let client = PublicNotesClient::new(mock_server.uri()).unwrap();
    let result = client
        .register(CredentialsRequest {
            username: "ada".to_string(),
            password: "hunter2".to_string(),
        })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_refresh_token_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh-token"))
        .and(body_json(json!({ "refreshToken": "r-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accessToken": "new" })))
        .mount(&mock_server)
        .await;

    let client = PublicNotesClient::new(mock_server.uri()).unwrap();
    let response = client
        .refresh_token(RefreshTokenRequest {
            refresh_token: "r-1".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.access_token, "new");
}

#[tokio::test]
async fn test_refresh_token_malformed_body_is_serialization_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = PublicNotesClient::new(mock_server.uri()).unwrap();
    let result = client
        .refresh_token(RefreshTokenRequest {
            refresh_token: "r-1".to_string(),
        })
        .await;

    assert!(matches!(result, Err(ClientError::Serialization(_))));
}

#[tokio::test]
async fn test_notes_requests_carry_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/notes/"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "title": "first",
                "content": "hello",
                "created_at": "2024-03-01T12:30:00Z"
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AuthenticatedNotesClient::new(mock_server.uri(), "access-1").unwrap();
    let notes = client.list_notes().await.unwrap();

    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "first");
}

#[tokio::test]
async fn test_create_and_delete_note() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/notes/"))
        .and(body_json(json!({ "title": "t", "content": "c" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9,
            "title": "t",
            "content": "c",
            "created_at": "2024-03-01T12:30:00Z"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/notes/delete/9/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TypedClientBuilder::new()
        .base_url(mock_server.uri())
        .build_authenticated("access-1")
        .unwrap();

    let note = client
        .create_note(CreateNoteRequest {
            title: "t".to_string(),
            content: "c".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(note.id, 9);

    assert!(client.delete_note(note.id).await.is_ok());
}

#[tokio::test]
async fn test_error_handling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/notes/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = AuthenticatedNotesClient::new(mock_server.uri(), "stale").unwrap();
    let result = client.list_notes().await;

    assert!(matches!(result, Err(ClientError::AuthenticationFailed(ref msg)) if msg == "Unauthorized"));
}
