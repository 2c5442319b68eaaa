use http::header::CONTENT_TYPE;
use serde::Serialize;
use url::Url;

use crate::oauth2::errors::OAuth2Error;
use crate::oauth2::types::TokenResponse;

use super::utils::{parse_token_response, read_success_body};

/// POST a grant form to the token endpoint and parse the issued tokens.
///
/// `reqwest`'s `form` sets `Content-Type: application/x-www-form-urlencoded`.
pub(super) async fn request_token<F: Serialize + ?Sized>(
    client: &reqwest::Client,
    token_endpoint: &Url,
    form: &F,
) -> Result<TokenResponse, OAuth2Error> {
    let response = client
        .post(token_endpoint.as_str())
        .form(form)
        .send()
        .await
        .map_err(|e| OAuth2Error::transport(format!("Token request failed: {e}")))?;

    tracing::debug!("Token endpoint responded with {}", response.status());

    let body = read_success_body(response).await?;
    parse_token_response(&body)
}

/// POST to the account info endpoint with a bearer token and return the raw body.
pub(super) async fn fetch_team_info(
    client: &reqwest::Client,
    account_info_url: &Url,
    access_token: &str,
) -> Result<String, OAuth2Error> {
    // Header built by hand so the scheme is exactly "Bearer <token>"
    let response = client
        .post(account_info_url.as_str())
        .header(http::header::AUTHORIZATION, format!("Bearer {access_token}"))
        .send()
        .await
        .map_err(|e| OAuth2Error::transport(format!("Account info request failed: {e}")))?;

    tracing::debug!(
        "Account info endpoint responded with {} ({:?})",
        response.status(),
        response.headers().get(CONTENT_TYPE)
    );

    read_success_body(response).await
}
