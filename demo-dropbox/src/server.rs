use axum::Router;
use std::net::SocketAddr;
use tokio::task::JoinHandle;

const DEFAULT_HTTP_PORT: u16 = 3001;

/// Listening port, from `PORT` or the default
pub(crate) fn http_port() -> Result<u16, std::num::ParseIntError> {
    match std::env::var("PORT") {
        Ok(port) => port.trim().parse(),
        Err(_) => Ok(DEFAULT_HTTP_PORT),
    }
}

pub(crate) fn spawn_http_server(port: u16, app: Router) -> JoinHandle<std::io::Result<()>> {
    tokio::spawn(async move {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        tracing::info!("HTTP server listening on {}", addr);
        axum_server::bind(addr)
            .serve(app.into_make_service())
            .await
    })
}
