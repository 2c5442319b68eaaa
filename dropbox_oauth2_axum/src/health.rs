use axum::{Json, Router, routing::get};
use dropbox_oauth2::OAuth2Client;
use serde_json::{Value, json};

pub(super) fn router() -> Router<OAuth2Client> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "service": "Dropbox OAuth2 client",
    }))
}
