//! dropbox_oauth2 - Server-side OAuth2 authorization code client for Dropbox
//!
//! This crate builds authorization URLs, exchanges authorization codes for
//! access/refresh token pairs, refreshes access tokens, and calls the team
//! info endpoint with an access token. Flow coordination functions combine
//! these operations for the HTTP adapter in `dropbox_oauth2_axum`.

mod config;
mod coordination;
mod oauth2;
mod utils;

pub use config::DBX_ROUTE_PREFIX;

pub use coordination::{
    AuthorizedResponse, CoordinationError, authorized_core, prepare_authorization_core,
    refresh_token_core,
};

pub use oauth2::{
    AuthResponse, ClientConfig, DROPBOX_API_URL, DROPBOX_AUTH_URL, DROPBOX_CLIENT_ID,
    DROPBOX_CLIENT_SECRET, DROPBOX_HTTP_TIMEOUT_SECS, DROPBOX_REDIRECT_URI, DROPBOX_TOKEN_URL,
    OAuth2Client, OAuth2Error, RefreshTokenRequest, TokenResponse, build_authorization_url,
};

pub use utils::UtilError;
