//! Client configuration and initialization
//!
//! Every outgoing request that needs a session goes through
//! [`create_authenticated_client`], which attaches whatever access token the
//! token store holds at call time.

use crate::auth::token_store::{TokenKind, TokenStore};
use crate::config::ApiConfig;
pub use notes_http::client::ClientError;
use notes_http::client::{AuthenticatedNotesClient, PublicNotesClient, TypedClientBuilder};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Global public client, built on first use
static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicNotesClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the public client instance (for unauthenticated endpoints)
pub fn create_public_client() -> Result<PublicNotesClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .map_err(|_| ClientError::Configuration("public client lock poisoned".into()))?;

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = TypedClientBuilder::new()
        .base_url(ApiConfig::base_url())
        .build_public()?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Attach the stored access token to `client` (returns None if no token is stored)
pub fn attach_session<S: TokenStore>(
    client: &PublicNotesClient,
    store: &S,
) -> Option<AuthenticatedNotesClient> {
    store
        .get(TokenKind::Access)
        .map(|access_token| client.authenticate(access_token))
}

/// Get a client carrying the stored access token (returns None if no token is stored)
pub fn create_authenticated_client<S: TokenStore>(
    store: &S,
) -> Result<Option<AuthenticatedNotesClient>, ClientError> {
    Ok(attach_session(&create_public_client()?, store))
}
