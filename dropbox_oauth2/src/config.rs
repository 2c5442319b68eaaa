//! Central configuration for the dropbox_oauth2 crate

use std::sync::LazyLock;

/// Route prefix for all dropbox_oauth2 endpoints
///
/// This is the prefix under which the HTTP adapter mounts its endpoints.
/// Default: "/api"
pub static DBX_ROUTE_PREFIX: LazyLock<String> =
    LazyLock::new(|| std::env::var("DBX_ROUTE_PREFIX").unwrap_or_else(|_| "/api".to_string()));
