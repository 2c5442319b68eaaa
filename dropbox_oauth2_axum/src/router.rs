//! Combined router for all Dropbox OAuth2 endpoints

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use dropbox_oauth2::OAuth2Client;

/// Create a router for all Dropbox OAuth2 endpoints
///
/// Mount it under `DBX_ROUTE_PREFIX`. The endpoints will be available at:
/// - {DBX_ROUTE_PREFIX}/authorize/dropbox
/// - {DBX_ROUTE_PREFIX}/dropbox/redirect
/// - {DBX_ROUTE_PREFIX}/dropbox/refresh-token
/// - {DBX_ROUTE_PREFIX}/health
pub fn dropbox_oauth2_router(client: OAuth2Client) -> Router {
    dropbox_oauth2_router_no_trace(client).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Create the router without HTTP tracing
///
/// Use this if you want to add your own tracing middleware or if you don't need HTTP request tracing.
pub fn dropbox_oauth2_router_no_trace(client: OAuth2Client) -> Router {
    Router::new()
        .merge(super::oauth2::router())
        .merge(super::health::router())
        .with_state(client)
}
