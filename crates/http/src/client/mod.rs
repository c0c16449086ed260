//! Notes service HTTP client

pub mod auth_typed;
pub mod error;
pub mod notes;
pub mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedNotesClient, PublicNotesClient, TypedClientBuilder};

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("notes-client/", env!("CARGO_PKG_VERSION"));

/// Send a request and decode a JSON body from a success response
async fn execute_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}

/// Send a request whose success response carries no body we care about
async fn execute_status(request: RequestBuilder) -> Result<StatusCode, ClientError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(status)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}
