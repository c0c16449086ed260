//! Common types used by the client and the notes service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Username/password credentials, used for both login and registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Login response carrying the initial token pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairResponse {
    /// Short-lived access token
    pub access: String,
    /// Long-lived refresh token
    pub refresh: String,
}

/// Refresh token request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Refresh token response
///
/// Only the access token is rotated; any other fields in the body are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

/// A stored note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Note creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
}
