//! Session authentication
//!
//! Token persistence, access token inspection, refresh, and the gate that
//! protects views.

pub mod gate;
pub mod guard;
pub mod inspector;
pub mod refresh;
pub mod token_store;

// Re-export commonly used items
pub use gate::{AuthGate, AuthorizationState};
pub use guard::ProtectedRoute;
pub use inspector::{Claims, DecodeError};
pub use refresh::{RefreshCoordinator, RefreshError};
pub use token_store::{LocalTokenStore, MemoryTokenStore, StoreError, TokenKind, TokenStore};
