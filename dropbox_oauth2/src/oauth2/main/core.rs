use std::sync::Arc;

use crate::oauth2::config::ClientConfig;
use crate::oauth2::errors::OAuth2Error;
use crate::oauth2::types::{AuthorizationRequest, ExchangeRequest, RefreshRequest, TokenResponse};
use crate::utils::{gen_random_uuid, mask_secret};

use super::dropbox::{fetch_team_info, request_token};
use super::utils::{build_http_client, require_non_blank};

/// Build the provider authorization URL for a new authorization attempt.
///
/// Returns the URL together with the freshly generated `state`. The state is
/// not stored anywhere; callers that want anti-forgery protection must keep
/// it and compare it with the value echoed back to the redirect callback.
pub fn build_authorization_url(config: &ClientConfig) -> Result<(String, String), OAuth2Error> {
    if config.client_id().is_empty() {
        return Err(OAuth2Error::Configuration(
            "client_id must not be empty".to_string(),
        ));
    }
    if config.redirect_uri().is_empty() {
        return Err(OAuth2Error::Configuration(
            "redirect_uri must not be empty".to_string(),
        ));
    }

    let request = AuthorizationRequest {
        client_id: config.client_id(),
        redirect_uri: config.redirect_uri(),
        response_type: "code",
        state: gen_random_uuid()?.to_string(),
        token_access_type: "offline",
    };

    let mut url = config.authorize_endpoint().clone();
    url.query_pairs_mut()
        .append_pair("client_id", request.client_id)
        .append_pair("redirect_uri", request.redirect_uri)
        .append_pair("response_type", request.response_type)
        .append_pair("state", &request.state)
        .append_pair("token_access_type", request.token_access_type);

    tracing::debug!("Auth URL: {}", url);

    Ok((url.into(), request.state))
}

/// Dropbox OAuth2 client.
///
/// Holds the immutable configuration and a pooled HTTP client. Cloning is
/// cheap and every clone shares both, so a single instance can serve any
/// number of concurrent requests.
#[derive(Debug, Clone)]
pub struct OAuth2Client {
    config: Arc<ClientConfig>,
    http: reqwest::Client,
}

impl OAuth2Client {
    pub fn new(config: ClientConfig) -> Result<Self, OAuth2Error> {
        let http = build_http_client(config.http_timeout())?;
        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// See [`build_authorization_url`]
    pub fn authorization_url(&self) -> Result<(String, String), OAuth2Error> {
        build_authorization_url(&self.config)
    }

    /// Exchange an authorization code for a token pair.
    pub async fn exchange_code_for_token(&self, code: &str) -> Result<TokenResponse, OAuth2Error> {
        let code = require_non_blank(code, "code")?;

        let form = ExchangeRequest {
            code,
            grant_type: "authorization_code",
            client_id: self.config.client_id(),
            client_secret: self.config.client_secret(),
            redirect_uri: self.config.redirect_uri(),
        };

        tracing::info!("Exchanging authorization code for token");
        let token = request_token(&self.http, self.config.token_endpoint(), &form).await?;
        tracing::debug!(
            "Received {} token {} (refresh token: {}, expires_in: {:?})",
            token.token_type,
            mask_secret(&token.access_token),
            token.refresh_token.is_some(),
            token.expires_in
        );
        Ok(token)
    }

    /// Obtain a new access token with a refresh token.
    ///
    /// A blank refresh token is rejected before any request is sent.
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<TokenResponse, OAuth2Error> {
        let refresh_token = require_non_blank(refresh_token, "refresh_token")?;

        let form = RefreshRequest {
            grant_type: "refresh_token",
            refresh_token,
            client_id: self.config.client_id(),
            client_secret: self.config.client_secret(),
        };

        tracing::info!("Refreshing access token");
        let token = request_token(&self.http, self.config.token_endpoint(), &form).await?;
        if token.expires_in.is_none() {
            tracing::warn!("Refresh response did not include expires_in");
        }
        Ok(token)
    }

    /// Call the team info endpoint and return its body unparsed.
    pub async fn fetch_account_info(&self, access_token: &str) -> Result<String, OAuth2Error> {
        tracing::info!("Fetching account info");
        fetch_team_info(&self.http, self.config.account_info_url(), access_token).await
    }
}
