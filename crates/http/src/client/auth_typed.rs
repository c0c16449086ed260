//! Type-safe authentication client extensions

use super::{error::ClientError, typed::PublicNotesClient};
use crate::types::{
    CredentialsRequest, RefreshTokenRequest, RefreshTokenResponse, TokenPairResponse,
};
use reqwest::Method;

/// Path of the access token refresh endpoint
pub const REFRESH_TOKEN_PATH: &str = "/auth/refresh-token";
/// Path of the login endpoint
pub const LOGIN_PATH: &str = "/api/token/";
/// Path of the registration endpoint
pub const REGISTER_PATH: &str = "/api/user/register/";

/// Authentication endpoints, all public
impl PublicNotesClient {
    /// Exchange username and password for an access/refresh token pair
    pub async fn login(&self, request: CredentialsRequest) -> Result<TokenPairResponse, ClientError> {
        let req = self.request(Method::POST, LOGIN_PATH).json(&request);
        self.execute(req).await
    }

    /// Create an account. The response body is not used.
    pub async fn register(&self, request: CredentialsRequest) -> Result<(), ClientError> {
        let req = self.request(Method::POST, REGISTER_PATH).json(&request);
        self.send(req).await.map(|_| ())
    }

    /// Trade a refresh token for a new access token
    pub async fn refresh_token(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, ClientError> {
        let req = self.request(Method::POST, REFRESH_TOKEN_PATH).json(&request);
        self.execute(req).await
    }
}
