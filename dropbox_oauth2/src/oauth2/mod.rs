mod config;
mod errors;
mod main;
mod types;

pub use config::{
    ClientConfig, DROPBOX_API_URL, DROPBOX_AUTH_URL, DROPBOX_CLIENT_ID, DROPBOX_CLIENT_SECRET,
    DROPBOX_HTTP_TIMEOUT_SECS, DROPBOX_REDIRECT_URI, DROPBOX_TOKEN_URL,
};
pub use errors::OAuth2Error;
pub use main::{OAuth2Client, build_authorization_url};
pub use types::{AuthResponse, RefreshTokenRequest, TokenResponse};
