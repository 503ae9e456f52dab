//! UPS client-credentials exchange

use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;
use upsbridge_common::{SecureString, TokenGrant, TokenIssuer, TokenManagerError, TokenResponse};
use upsbridge_domain::constants::{MERCHANT_ID_HEADER, OAUTH_TOKEN_PATH};

use crate::http::HttpClient;

/// Issues bearer tokens from the UPS OAuth endpoint.
///
/// Sends `grant_type=client_credentials` as a form body, authenticates with
/// HTTP Basic (client id / secret), and tags the request with the
/// `x-merchant-id` header.
#[derive(Clone)]
pub struct UpsTokenIssuer {
    http: HttpClient,
    merchant_id: String,
}

impl UpsTokenIssuer {
    pub fn new(http: HttpClient, merchant_id: impl Into<String>) -> Self {
        Self { http, merchant_id: merchant_id.into() }
    }
}

#[async_trait]
impl TokenIssuer for UpsTokenIssuer {
    async fn issue_token(
        &self,
        base_url: &str,
        client_id: &str,
        client_secret: &SecureString,
    ) -> Result<TokenGrant, TokenManagerError> {
        let url = format!("{base_url}{OAUTH_TOKEN_PATH}");
        let request = self
            .http
            .request(Method::POST, &url)
            .basic_auth(client_id, Some(client_secret.expose()))
            .header(MERCHANT_ID_HEADER, &self.merchant_id)
            .form(&[("grant_type", "client_credentials")]);

        let response: TokenResponse = self
            .http
            .send_json(request)
            .await
            .map_err(|err| TokenManagerError::RefreshFailed(err.to_string()))?;

        if response.access_token.is_empty() {
            return Err(TokenManagerError::InvalidGrant("empty access token".to_string()));
        }

        debug!(expires_in = response.expires_in, "token endpoint issued a grant");

        Ok(TokenGrant::from(response))
    }
}
