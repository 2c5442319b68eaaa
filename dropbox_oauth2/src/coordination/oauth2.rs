use serde::Serialize;

use crate::oauth2::{AuthResponse, OAuth2Client, RefreshTokenRequest, TokenResponse};

use super::errors::CoordinationError;

/// Result of a completed redirect callback
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizedResponse {
    /// Raw body of the team info endpoint
    pub team_info: String,
    pub token: TokenResponse,
}

/// Start an authorization attempt, returning the provider URL and its state.
pub fn prepare_authorization_core(
    client: &OAuth2Client,
) -> Result<(String, String), CoordinationError> {
    tracing::info!("Generating Dropbox authorization URL");
    Ok(client.authorization_url()?)
}

/// Complete the authorization code flow for a redirect callback.
///
/// An `error` echoed by the provider short-circuits before any token
/// exchange. The `state` parameter is not verified against anything.
pub async fn authorized_core(
    client: &OAuth2Client,
    auth_response: &AuthResponse,
) -> Result<AuthorizedResponse, CoordinationError> {
    if let Some(error) = &auth_response.error {
        return Err(CoordinationError::ProviderError {
            error: error.clone(),
            description: auth_response.error_description.clone(),
        }
        .log());
    }

    tracing::debug!("State in response: {:?}", auth_response.state);

    let token = client.exchange_code_for_token(&auth_response.code).await?;
    let team_info = client.fetch_account_info(&token.access_token).await?;

    Ok(AuthorizedResponse { team_info, token })
}

/// Refresh an access token from the refresh endpoint's JSON body.
pub async fn refresh_token_core(
    client: &OAuth2Client,
    request: &RefreshTokenRequest,
) -> Result<TokenResponse, CoordinationError> {
    let refresh_token = request.refresh_token.as_deref().unwrap_or_default();
    Ok(client.refresh_access_token(refresh_token).await?)
}
