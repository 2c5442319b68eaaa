//! dropbox_oauth2_axum - Axum integration for the dropbox_oauth2 client
//!
//! Exposes the authorization redirect, the redirect callback, the token
//! refresh endpoint and a health check as a single router.

mod error;
mod health;
mod oauth2;
mod router;


pub use router::{dropbox_oauth2_router, dropbox_oauth2_router_no_trace};

// Re-export the route prefix and client types from the dropbox_oauth2 crate
pub use dropbox_oauth2::{ClientConfig, DBX_ROUTE_PREFIX, OAuth2Client, OAuth2Error};
