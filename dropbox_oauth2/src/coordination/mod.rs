//! Flow coordination module
//!
//! High-level functions that combine the core OAuth2 operations into the
//! flows exposed by the HTTP adapter: starting an authorization, handling the
//! redirect callback, and refreshing an access token.

mod errors;
mod oauth2;

pub use errors::CoordinationError;
pub use oauth2::{AuthorizedResponse, authorized_core, prepare_authorization_core, refresh_token_core};
