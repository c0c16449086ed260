//! Authorization gate for protected views
//!
//! One [`AuthGate`] lives for one mount of a protected view. It starts
//! [`AuthorizationState::Unresolved`] and settles on `Authorized` or
//! `Unauthorized` exactly once:
//!
//! 1. no access token stored → `Unauthorized`
//! 2. access token does not decode → `Unauthorized`
//! 3. access token not yet expired → `Authorized`
//! 4. expired → one refresh attempt; `Authorized` on success, `Unauthorized` otherwise

use super::inspector;
use super::refresh::RefreshCoordinator;
use super::token_store::{TokenKind, TokenStore};
use chrono::{DateTime, Utc};
use futures::future::{AbortHandle, Aborted, abortable};
use notes_http::client::PublicNotesClient;
use tracing::{debug, warn};

/// Verdict of the gate for the current mount
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthorizationState {
    /// No check has completed yet
    #[default]
    Unresolved,
    Authorized,
    Unauthorized,
}

impl AuthorizationState {
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unresolved)
    }
}

/// Decides whether the stored session may see protected content
#[derive(Clone, Debug)]
pub struct AuthGate<S> {
    store: S,
    refresher: RefreshCoordinator<S>,
    state: AuthorizationState,
}

impl<S: TokenStore> AuthGate<S> {
    pub fn new(store: S, client: PublicNotesClient) -> Self {
        Self {
            refresher: RefreshCoordinator::new(store.clone(), client),
            store,
            state: AuthorizationState::Unresolved,
        }
    }

    pub const fn state(&self) -> AuthorizationState {
        self.state
    }

    /// Run the check against the current time
    pub async fn resolve(&mut self) -> AuthorizationState {
        self.resolve_at(Utc::now()).await
    }

    /// Run the check against `now`.
    ///
    /// Once resolved, later calls return the settled state without reading
    /// the store or contacting the service.
    pub async fn resolve_at(&mut self, now: DateTime<Utc>) -> AuthorizationState {
        if self.state.is_resolved() {
            return self.state;
        }

        let verdict = self.authorize(now).await;
        debug!(?verdict, "authorization resolved");
        self.state = verdict;
        verdict
    }

    async fn authorize(&self, now: DateTime<Utc>) -> AuthorizationState {
        let Some(access_token) = self.store.get(TokenKind::Access) else {
            debug!("no access token stored");
            return AuthorizationState::Unauthorized;
        };

        let claims = match inspector::decode(&access_token) {
            Ok(claims) => claims,
            Err(e) => {
                warn!("stored access token is malformed: {e}");
                return AuthorizationState::Unauthorized;
            }
        };

        if !claims.is_expired(now) {
            return AuthorizationState::Authorized;
        }

        debug!(expired_at = %claims.expires_at, "access token expired, refreshing");
        match self.refresher.refresh().await {
            Ok(_) => AuthorizationState::Authorized,
            Err(e) => {
                warn!("session refresh failed: {e}");
                AuthorizationState::Unauthorized
            }
        }
    }
}

impl<S: TokenStore + 'static> AuthGate<S> {
    /// Turn the check into a task that can be abandoned.
    ///
    /// Aborting through the handle before the task finishes makes it yield
    /// `Err(Aborted)` instead of a verdict, so an unmounted view never
    /// receives a state update.
    pub fn into_cancellable(
        mut self,
    ) -> (
        impl Future<Output = Result<AuthorizationState, Aborted>>,
        AbortHandle,
    ) {
        abortable(async move { self.resolve().await })
    }
}
