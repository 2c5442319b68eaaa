//! Error types for flow coordination

use thiserror::Error;

use crate::oauth2::OAuth2Error;

/// Errors that can occur while coordinating an OAuth2 flow
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// The provider reported an error through the redirect callback
    #[error("Provider error: {error}")]
    ProviderError {
        error: String,
        description: Option<String>,
    },

    /// Error from OAuth2 operations
    #[error("OAuth2 error: {0}")]
    OAuth2Error(OAuth2Error),
}

impl CoordinationError {
    /// Log the error and return self
    ///
    /// This method logs the error with appropriate context and returns self,
    /// allowing for method chaining and explicit logging when needed.
    pub fn log(self) -> Self {
        match &self {
            Self::ProviderError { error, description } => {
                tracing::error!("Provider error: {} ({:?})", error, description)
            }
            Self::OAuth2Error(err) => log_oauth2_error(err),
        }
        self
    }
}

/// Caller mistakes are logged at warn, everything else at error
fn log_oauth2_error(err: &OAuth2Error) {
    if err.is_caller_error() {
        tracing::warn!("OAuth2 error: {}", err);
    } else {
        tracing::error!("OAuth2 error: {}", err);
    }
}

impl From<OAuth2Error> for CoordinationError {
    fn from(err: OAuth2Error) -> Self {
        log_oauth2_error(&err);
        Self::OAuth2Error(err)
    }
}
