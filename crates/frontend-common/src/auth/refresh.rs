//! Access token renewal

use super::token_store::{StoreError, TokenKind, TokenStore};
use notes_http::client::{ClientError, PublicNotesClient};
use notes_http::types::RefreshTokenRequest;
use thiserror::Error;
use tracing::debug;

/// Refresh failures. The stored refresh token is never modified on failure.
#[derive(Debug, Error)]
pub enum RefreshError {
    /// Nothing to refresh with; no request was sent
    #[error("no refresh token stored")]
    NoRefreshToken,

    /// The service refused the refresh, or the exchange failed in transit
    #[error("refresh rejected: {0}")]
    Rejected(#[from] ClientError),

    /// The new access token could not be persisted
    #[error("failed to store refreshed access token: {0}")]
    Persist(#[from] StoreError),
}

/// Exchanges the stored refresh token for a new access token
#[derive(Clone, Debug)]
pub struct RefreshCoordinator<S> {
    store: S,
    client: PublicNotesClient,
}

impl<S: TokenStore> RefreshCoordinator<S> {
    pub const fn new(store: S, client: PublicNotesClient) -> Self {
        Self { store, client }
    }

    /// Request a new access token and store it.
    ///
    /// Makes at most one request. The new token is written to the store
    /// before this returns, so later reads observe it.
    pub async fn refresh(&self) -> Result<String, RefreshError> {
        let refresh_token = self
            .store
            .get(TokenKind::Refresh)
            .ok_or(RefreshError::NoRefreshToken)?;

        let response = self
            .client
            .refresh_token(RefreshTokenRequest { refresh_token })
            .await?;

        self.store.set(TokenKind::Access, &response.access_token)?;
        debug!("access token refreshed");

        Ok(response.access_token)
    }
}
