use serde::{Deserialize, Serialize};

/// Token pair returned by the provider's token endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Only issued when offline access was granted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Lifetime of the access token in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

/// Parameters of a single authorization attempt
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AuthorizationRequest<'a> {
    pub(crate) client_id: &'a str,
    pub(crate) redirect_uri: &'a str,
    pub(crate) response_type: &'static str,
    pub(crate) state: String,
    pub(crate) token_access_type: &'static str,
}

/// Form body of the authorization code grant
#[derive(Debug, Serialize)]
pub(crate) struct ExchangeRequest<'a> {
    pub(crate) code: &'a str,
    pub(crate) grant_type: &'static str,
    pub(crate) client_id: &'a str,
    pub(crate) client_secret: &'a str,
    pub(crate) redirect_uri: &'a str,
}

/// Form body of the refresh token grant
#[derive(Debug, Serialize)]
pub(crate) struct RefreshRequest<'a> {
    pub(crate) grant_type: &'static str,
    pub(crate) refresh_token: &'a str,
    pub(crate) client_id: &'a str,
    pub(crate) client_secret: &'a str,
}

/// Query parameters delivered to the redirect callback
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub code: String,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// JSON body accepted by the refresh endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: Option<String>,
}
