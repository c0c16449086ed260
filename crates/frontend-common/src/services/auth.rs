//! Authentication API service
//!
//! Login and logout are the only writers of the token pair besides the
//! refresh coordinator.

use crate::auth::token_store::{LocalTokenStore, StoreError, TokenKind, TokenStore};
use crate::client::create_public_client;
use notes_http::client::{ClientError, PublicNotesClient};
use notes_http::types::CredentialsRequest;
use thiserror::Error;
use tracing::info;

/// Login/registration failures
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("could not save session: {0}")]
    Store(#[from] StoreError),
}

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService<S = LocalTokenStore> {
    store: S,
    client: Option<PublicNotesClient>,
}

impl AuthApiService {
    /// Create a service over browser storage and the global client
    pub const fn new() -> Self {
        Self {
            store: LocalTokenStore,
            client: None,
        }
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TokenStore> AuthApiService<S> {
    /// Create a service over an explicit store and client
    pub const fn with_client(store: S, client: PublicNotesClient) -> Self {
        Self {
            store,
            client: Some(client),
        }
    }

    fn client(&self) -> Result<PublicNotesClient, ClientError> {
        match &self.client {
            Some(client) => Ok(client.clone()),
            None => create_public_client(),
        }
    }

    /// Log in and persist the issued token pair
    pub async fn login(&self, username: String, password: String) -> Result<(), SessionError> {
        let pair = self
            .client()?
            .login(CredentialsRequest { username, password })
            .await?;

        self.store.set(TokenKind::Access, &pair.access)?;
        self.store.set(TokenKind::Refresh, &pair.refresh)?;
        info!("logged in");
        Ok(())
    }

    /// Create an account. Does not log in.
    pub async fn register(&self, username: String, password: String) -> Result<(), SessionError> {
        self.client()?
            .register(CredentialsRequest { username, password })
            .await?;
        Ok(())
    }

    /// Drop the stored session
    pub fn logout(&self) {
        self.store.clear();
        info!("logged out");
    }
}
