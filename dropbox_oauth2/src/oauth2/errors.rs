use http::StatusCode;
use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum OAuth2Error {
    /// Missing or invalid static configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed caller input, detected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport failure or non-2xx response from the provider.
    /// `status` is set whenever an HTTP response was actually received.
    #[error("Protocol error: {message}")]
    Protocol {
        status: Option<StatusCode>,
        message: String,
    },

    /// Response body is not valid JSON or lacks a required field
    #[error("Parse error: {0}")]
    Parse(String),
}

impl OAuth2Error {
    pub(crate) fn transport(message: impl Into<String>) -> Self {
        Self::Protocol {
            status: None,
            message: message.into(),
        }
    }

    pub(crate) fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Protocol {
            status: Some(status),
            message: message.into(),
        }
    }

    /// HTTP status returned by the provider, if the failure carries one
    pub fn http_status(&self) -> Option<StatusCode> {
        match self {
            Self::Protocol { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether the failure was caused by the caller's input rather than
    /// by configuration or the provider
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<UtilError> for OAuth2Error {
    fn from(err: UtilError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<reqwest::Error> for OAuth2Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::status(status, err.to_string()),
            None => Self::transport(err.to_string()),
        }
    }
}
