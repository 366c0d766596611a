//! HTTP front end: JSON category endpoints plus the embedded web UI.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::connector::api::Container;

pub use error::ServerError;
pub use routes::build;
pub use state::AppState;

/// Bind `addr` and serve until the process is interrupted or terminated.
pub async fn serve(
    container: Arc<Container>,
    addr: SocketAddr,
    cors_origins: Option<&str>,
) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");
    serve_until(listener, container, cors_origins, stop_requested()).await
}

/// Serve on an already bound listener. In-flight requests are drained once
/// `stop` resolves.
pub async fn serve_until(
    listener: TcpListener,
    container: Arc<Container>,
    cors_origins: Option<&str>,
    stop: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let app = build(Arc::new(AppState::new(container)), cors_origins);
    axum::serve(listener, app).with_graceful_shutdown(stop).await?;
    info!("HTTP server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM where the platform has it. A signal
/// that cannot be watched never resolves, so it cannot stop the server by
/// accident.
async fn stop_requested() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "cannot watch Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        _ = interrupt => info!("interrupted, draining connections"),
        _ = terminated() => info!("terminated, draining connections"),
    }
}

#[cfg(unix)]
async fn terminated() {
    use tokio::signal::unix::{signal, SignalKind};

    let Ok(mut sigterm) = signal(SignalKind::terminate()) else {
        warn!("cannot watch SIGTERM");
        return std::future::pending().await;
    };
    sigterm.recv().await;
}

#[cfg(not(unix))]
async fn terminated() {
    std::future::pending().await
}
