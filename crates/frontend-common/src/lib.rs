pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod logging;
pub mod routes;
pub mod services;

pub use auth::{AuthGate, AuthorizationState, LocalTokenStore, ProtectedRoute, TokenStore};
pub use client::{create_authenticated_client, create_public_client};
pub use components::Spinner;
pub use config::{ApiConfig, AuthConfig};
pub use logging::init_logging;
pub use routes::Route;
