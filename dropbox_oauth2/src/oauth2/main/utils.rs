use std::time::Duration;

use crate::oauth2::errors::OAuth2Error;
use crate::oauth2::types::TokenResponse;

/// Longest slice of a provider error body kept in error messages
const ERROR_BODY_LIMIT: usize = 256;

/// Creates the HTTP client used for every provider call with the following settings:
///
/// - `timeout`: taken from the client configuration. A provider that never
///   answers must not hold a request handler open indefinitely.
///
/// - `pool_idle_timeout`: 90 seconds. Controls how long an idle connection
///   can stay in the connection pool before being removed.
///
/// - `pool_max_idle_per_host`: 32. Maximum number of idle connections kept
///   per host in the connection pool.
pub(super) fn build_http_client(timeout: Duration) -> Result<reqwest::Client, OAuth2Error> {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(32)
        .build()
        .map_err(|e| OAuth2Error::Configuration(format!("Failed to create HTTP client: {e}")))
}

/// Read the body of a provider response, failing on any non-2xx status.
///
/// A non-2xx error always carries the status, even when its body cannot be read.
pub(super) async fn read_success_body(response: reqwest::Response) -> Result<String, OAuth2Error> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!("Provider responded with {}: {}", status, body);
        let snippet: String = body.chars().take(ERROR_BODY_LIMIT).collect();
        return Err(OAuth2Error::status(
            status,
            format!("Provider responded with {status}: {snippet}"),
        ));
    }

    Ok(response.text().await?)
}

/// Parse the token endpoint's JSON payload.
///
/// `access_token` and `token_type` must be present and non-empty.
pub(super) fn parse_token_response(body: &str) -> Result<TokenResponse, OAuth2Error> {
    let token: TokenResponse = serde_json::from_str(body)
        .map_err(|e| OAuth2Error::Parse(format!("Invalid token response: {e}")))?;

    if token.access_token.is_empty() {
        return Err(OAuth2Error::Parse(
            "access_token is empty in token response".to_string(),
        ));
    }
    if token.token_type.is_empty() {
        return Err(OAuth2Error::Parse(
            "token_type is empty in token response".to_string(),
        ));
    }

    Ok(token)
}

/// Trim caller-supplied credential input, rejecting blank values.
pub(super) fn require_non_blank<'a>(value: &'a str, name: &str) -> Result<&'a str, OAuth2Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(OAuth2Error::Validation(format!("{name} is required")));
    }
    Ok(trimmed)
}
