use std::fmt;
use std::time::Duration;
use url::Url;

use super::errors::OAuth2Error;
use crate::utils::mask_secret;

pub const DROPBOX_CLIENT_ID: &str = "DROPBOX_CLIENT_ID";
pub const DROPBOX_CLIENT_SECRET: &str = "DROPBOX_CLIENT_SECRET";
pub const DROPBOX_REDIRECT_URI: &str = "DROPBOX_REDIRECT_URI";
pub const DROPBOX_AUTH_URL: &str = "DROPBOX_AUTH_URL";
pub const DROPBOX_TOKEN_URL: &str = "DROPBOX_TOKEN_URL";
pub const DROPBOX_API_URL: &str = "DROPBOX_API_URL";
pub const DROPBOX_HTTP_TIMEOUT_SECS: &str = "DROPBOX_HTTP_TIMEOUT_SECS";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Path of the account info endpoint, relative to the API base URL
const TEAM_INFO_PATH: &str = "/2/team/get_info";

/// Static client credentials and provider endpoints.
///
/// Built once at startup and never mutated afterwards. Every core operation
/// reads from the same value, so alternate configurations (tests, staging
/// providers) only require constructing a different `ClientConfig`.
#[derive(Clone)]
pub struct ClientConfig {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    authorize_endpoint: Url,
    token_endpoint: Url,
    api_base: Url,
    account_info_url: Url,
    http_timeout: Duration,
}

impl ClientConfig {
    /// Load the configuration from process environment variables
    pub fn from_env() -> Result<Self, OAuth2Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary key lookup.
    ///
    /// All six endpoint and credential keys are required. The three endpoint
    /// values must be absolute URLs. `DROPBOX_HTTP_TIMEOUT_SECS` is optional
    /// and must be a positive integer when present.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, OAuth2Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, OAuth2Error> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| OAuth2Error::Configuration(format!("{key} must be set")))
        };
        let parse_url = |key: &str| -> Result<Url, OAuth2Error> {
            let value = required(key)?;
            Url::parse(&value)
                .map_err(|e| OAuth2Error::Configuration(format!("{key} is not a valid URL: {e}")))
        };

        let http_timeout = match lookup(DROPBOX_HTTP_TIMEOUT_SECS) {
            Some(value) => {
                let secs = value
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| {
                        OAuth2Error::Configuration(format!(
                            "{DROPBOX_HTTP_TIMEOUT_SECS} must be a positive integer, got '{value}'"
                        ))
                    })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        let api_base = parse_url(DROPBOX_API_URL)?;
        let account_info_url = Url::parse(&format!(
            "{}{}",
            api_base.as_str().trim_end_matches('/'),
            TEAM_INFO_PATH
        ))
        .map_err(|e| OAuth2Error::Configuration(format!("Invalid account info URL: {e}")))?;

        let config = Self {
            client_id: required(DROPBOX_CLIENT_ID)?,
            client_secret: required(DROPBOX_CLIENT_SECRET)?,
            redirect_uri: required(DROPBOX_REDIRECT_URI)?,
            authorize_endpoint: parse_url(DROPBOX_AUTH_URL)?,
            token_endpoint: parse_url(DROPBOX_TOKEN_URL)?,
            api_base,
            account_info_url,
            http_timeout,
        };

        tracing::debug!("Loaded client configuration: {:?}", config);
        Ok(config)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    pub fn authorize_endpoint(&self) -> &Url {
        &self.authorize_endpoint
    }

    pub fn token_endpoint(&self) -> &Url {
        &self.token_endpoint
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    pub fn account_info_url(&self) -> &Url {
        &self.account_info_url
    }

    pub fn http_timeout(&self) -> Duration {
        self.http_timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &mask_secret(&self.client_secret))
            .field("redirect_uri", &self.redirect_uri)
            .field("authorize_endpoint", &self.authorize_endpoint.as_str())
            .field("token_endpoint", &self.token_endpoint.as_str())
            .field("api_base", &self.api_base.as_str())
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}
