use axum::Router;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dropbox_oauth2_axum::{ClientConfig, DBX_ROUTE_PREFIX, OAuth2Client, dropbox_oauth2_router};

mod server;

use crate::server::{http_port, spawn_http_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}=debug,dropbox_oauth2=debug,dropbox_oauth2_axum=debug,tower_http=info",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing or invalid provider configuration is fatal at startup
    let config = ClientConfig::from_env().inspect_err(|e| tracing::error!("{}", e))?;
    let client = OAuth2Client::new(config)?;

    let prefix = DBX_ROUTE_PREFIX.trim_end_matches('/');
    let app = if prefix.is_empty() {
        Router::new().merge(dropbox_oauth2_router(client))
    } else {
        Router::new().nest(prefix, dropbox_oauth2_router(client))
    };

    let http_server = spawn_http_server(http_port()?, app);

    http_server.await??;
    Ok(())
}
