//! Type-safe API clients that enforce authentication requirements at compile time

use super::{ClientError, USER_AGENT, execute_json, execute_status};
use reqwest::{Client, ClientBuilder, StatusCode, header};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for public endpoints that don't require authentication
#[derive(Clone, Debug)]
pub struct PublicNotesClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that require a bearer access token
#[derive(Clone, Debug)]
pub struct AuthenticatedNotesClient {
    client: Client,
    base_url: String,
    access_token: String,
}

fn build_http_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        ClientBuilder::new().user_agent(USER_AGENT).build()?
    };

    Ok(client)
}

impl PublicNotesClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, None)
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = build_http_client(timeout)?;
        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and decode its JSON body
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute_json(request).await
    }

    /// Execute a request, keeping only the success status
    pub async fn send(&self, request: reqwest::RequestBuilder) -> Result<StatusCode, ClientError> {
        execute_status(request).await
    }

    /// Attach an access token, producing an authenticated client that shares the connection pool
    pub fn authenticate(&self, access_token: impl Into<String>) -> AuthenticatedNotesClient {
        AuthenticatedNotesClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            access_token: access_token.into(),
        }
    }
}

impl AuthenticatedNotesClient {
    /// Create a new authenticated client
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Ok(PublicNotesClient::new(base_url)?.authenticate(access_token))
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder carrying the bearer token
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.access_token))
    }

    /// Execute a request and decode its JSON body
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        execute_json(request).await
    }

    /// Execute a request, keeping only the success status
    pub async fn send(&self, request: reqwest::RequestBuilder) -> Result<StatusCode, ClientError> {
        execute_status(request).await
    }
}

/// Type-safe builder that creates the appropriate client type
#[derive(Default)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicNotesClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        PublicNotesClient::new_with_timeout(base_url, self.timeout)
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        access_token: impl Into<String>,
    ) -> Result<AuthenticatedNotesClient, ClientError> {
        Ok(self.build_public()?.authenticate(access_token))
    }
}
