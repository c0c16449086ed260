//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Success response whose body is not the expected JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_maps_known_codes() {
        assert!(matches!(
            ClientError::from_status(StatusCode::BAD_REQUEST, String::new()),
            ClientError::BadRequest(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::UNAUTHORIZED, String::new()),
            ClientError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            ClientError::from_status(StatusCode::NOT_FOUND, "gone".into()),
            ClientError::NotFound(msg) if msg == "gone"
        ));
    }

    #[test]
    fn test_from_status_falls_back_to_server_error() {
        let error = ClientError::from_status(StatusCode::BAD_GATEWAY, "upstream".into());
        assert!(matches!(error, ClientError::ServerError { status: 502, .. }));
        assert_eq!(error.to_string(), "Server error 502: upstream");
    }
}
