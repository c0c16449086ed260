//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Local storage key for the access token
    pub const ACCESS_TOKEN_KEY: &'static str = "access_token";

    /// Local storage key for the refresh token
    pub const REFRESH_TOKEN_KEY: &'static str = "refresh_token";

    /// Path the auth gate redirects to when a view is not authorized
    pub const LOGIN_ROUTE: &'static str = "/login";
}

/// API endpoint configuration
pub struct ApiConfig;

impl ApiConfig {
    /// Base URL baked in at build time, e.g. `NOTES_API_URL=https://notes.example.com trunk build`
    pub const BUILD_BASE_URL: Option<&'static str> = option_env!("NOTES_API_URL");

    /// Base URL for API calls: the build-time value, else the page origin, else relative
    pub fn base_url() -> String {
        if let Some(url) = Self::BUILD_BASE_URL.filter(|url| !url.is_empty()) {
            return url.to_string();
        }

        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    }
}

/// Logging configuration
pub struct LogConfig;

impl LogConfig {
    /// Maximum level, from `NOTES_LOG` at build time
    pub fn level() -> tracing::Level {
        option_env!("NOTES_LOG")
            .and_then(|level| level.parse().ok())
            .unwrap_or(tracing::Level::INFO)
    }
}
