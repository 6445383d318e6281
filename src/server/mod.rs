// Local HTTP server for the browser front end
// Serves the JSON API over the app state, plus the static front end if one is configured

pub mod routes;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, info, warn};

use crate::commands::AppState;

/// Holds the running server's shutdown mechanism
pub struct RunningServer {
    pub shutdown_tx: oneshot::Sender<()>,
    pub addr: SocketAddr,
    pub handle: JoinHandle<()>,
}

impl RunningServer {
    /// Signal shutdown and wait for in-flight requests to drain
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        if let Err(e) = self.handle.await {
            error!("Server task failed: {}", e);
        }
    }
}

/// API routes plus the optional static front end
pub fn build_router(state: Arc<AppState>, frontend_dir: Option<PathBuf>) -> Router {
    // CORS so a front end served by a dev server can reach the API
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(HeaderValue::from_static("*"));

    let api = routes::api_routes().with_state(state);

    match frontend_dir.filter(|dir| dir.join("index.html").exists()) {
        Some(dir) => {
            info!("Serving front end from {:?}", dir);
            let index = dir.join("index.html");
            api.fallback_service(ServeDir::new(&dir).fallback(ServeFile::new(index)))
                .layer(cors)
        }
        None => {
            info!("No front end directory, API-only mode");
            api.layer(cors)
        }
    }
}

/// Start the server on `host`, preferring `port`.
/// Returns the running server handle (for shutdown) or an error.
pub async fn start_server(
    host: IpAddr,
    port: u16,
    state: Arc<AppState>,
    frontend_dir: Option<PathBuf>,
) -> std::io::Result<RunningServer> {
    let app = build_router(state, frontend_dir);

    let listener = bind_with_fallback(host, port).await?;
    let addr = listener.local_addr()?;
    info!("Server listening on http://{}", addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(async move {
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Shutdown signal received, draining connections...");
            })
            .await;
        if let Err(e) = result {
            error!("Server error: {}", e);
        }
        info!("Server stopped");
    });

    Ok(RunningServer {
        shutdown_tx,
        addr,
        handle,
    })
}

/// Bind the preferred port, then the next ten, then an OS-assigned one
async fn bind_with_fallback(host: IpAddr, preferred_port: u16) -> std::io::Result<tokio::net::TcpListener> {
    if let Ok(listener) = tokio::net::TcpListener::bind(SocketAddr::new(host, preferred_port)).await {
        return Ok(listener);
    }

    for offset in 1..=10u16 {
        let port = preferred_port.saturating_add(offset);
        if let Ok(listener) = tokio::net::TcpListener::bind(SocketAddr::new(host, port)).await {
            warn!("Port {} unavailable, using {}", preferred_port, port);
            return Ok(listener);
        }
    }

    let listener = tokio::net::TcpListener::bind(SocketAddr::new(host, 0)).await?;
    warn!(
        "All preferred ports unavailable, OS assigned port {}",
        listener.local_addr()?.port()
    );
    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[tokio::test]
    async fn test_bind_falls_back_when_port_taken() {
        let host = IpAddr::V4(Ipv4Addr::LOCALHOST);
        let taken = tokio::net::TcpListener::bind(SocketAddr::new(host, 0)).await.unwrap();
        let taken_port = taken.local_addr().unwrap().port();

        let listener = bind_with_fallback(host, taken_port).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), taken_port);
    }
}
