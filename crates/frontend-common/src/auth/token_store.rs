//! Persistent access/refresh token storage
//!
//! All reads and writes of the token pair go through [`TokenStore`]. Nothing
//! else in the app touches the underlying `localStorage` keys.

use crate::config::AuthConfig;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;
use tracing::warn;
use web_sys::Storage;

/// Which half of the token pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Storage key the token lives under
    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Access => AuthConfig::ACCESS_TOKEN_KEY,
            Self::Refresh => AuthConfig::REFRESH_TOKEN_KEY,
        }
    }
}

/// Token store write failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// No storage backend in this context (e.g. storage disabled by the browser)
    #[error("token storage is unavailable")]
    Unavailable,

    /// The backend refused the write, usually a quota error
    #[error("failed to write {key}: {message}")]
    Write { key: &'static str, message: String },
}

/// Narrow interface over the persisted token pair.
///
/// Values are opaque strings; no validation happens here. Handles are cheap to
/// clone and all clones see the same underlying storage.
pub trait TokenStore: Clone {
    /// Read a token, `None` when it was never stored or has been cleared
    fn get(&self, kind: TokenKind) -> Option<String>;

    /// Store a token, replacing any previous value
    fn set(&self, kind: TokenKind, value: &str) -> Result<(), StoreError>;

    /// Remove both tokens
    fn clear(&self);
}

/// Token store backed by the browser's `localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl LocalTokenStore {
    fn storage() -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for LocalTokenStore {
    fn get(&self, kind: TokenKind) -> Option<String> {
        Self::storage()?
            .get_item(kind.storage_key())
            .ok()
            .flatten()
    }

    fn set(&self, kind: TokenKind, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(kind.storage_key(), value)
            .map_err(|e| StoreError::Write {
                key: kind.storage_key(),
                message: format!("{e:?}"),
            })
    }

    fn clear(&self) {
        // Both removals happen in one synchronous turn, so no other task can
        // observe a half-cleared pair.
        if let Some(storage) = Self::storage() {
            for kind in [TokenKind::Access, TokenKind::Refresh] {
                if let Err(e) = storage.remove_item(kind.storage_key()) {
                    warn!(key = kind.storage_key(), "failed to remove token: {e:?}");
                }
            }
        }
    }
}

/// In-memory token store for tests and hosts without web storage
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Rc<RefCell<HashMap<TokenKind, String>>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given tokens
    pub fn with_tokens(access: Option<&str>, refresh: Option<&str>) -> Self {
        let store = Self::new();
        {
            let mut tokens = store.tokens.borrow_mut();
            if let Some(access) = access {
                tokens.insert(TokenKind::Access, access.to_string());
            }
            if let Some(refresh) = refresh {
                tokens.insert(TokenKind::Refresh, refresh.to_string());
            }
        }
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, kind: TokenKind) -> Option<String> {
        self.tokens.borrow().get(&kind).cloned()
    }

    fn set(&self, kind: TokenKind, value: &str) -> Result<(), StoreError> {
        self.tokens.borrow_mut().insert(kind, value.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.tokens.borrow_mut().clear();
    }
}

/// Store whose reads succeed but whose writes are always refused
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct ReadOnlyTokenStore(pub MemoryTokenStore);

#[cfg(test)]
impl TokenStore for ReadOnlyTokenStore {
    fn get(&self, kind: TokenKind) -> Option<String> {
        self.0.get(kind)
    }

    fn set(&self, _kind: TokenKind, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }

    fn clear(&self) {
        self.0.clear();
    }
}
