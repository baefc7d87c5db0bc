//! HTTP server exposing the read-only climate API.

pub mod handlers;
pub mod response;
pub mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerSettings;
use crate::error::Result;
use crate::utils::constants::*;

pub use response::ErrorResponse;
pub use state::AppState;

/// Builds the router over shared state.
pub fn router(state: Arc<AppState>, cors: bool) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::welcome))
        .route("/health", get(handlers::health))
        .route("/api/status", get(handlers::status))
        .route(ROUTE_PRECIPITATION, get(handlers::precipitation))
        .route(ROUTE_STATIONS, get(handlers::stations))
        .route(ROUTE_TOBS, get(handlers::temperature_observations))
        .route(ROUTE_TEMP_FROM, get(handlers::temperature_from))
        .route(ROUTE_TEMP_BETWEEN, get(handlers::temperature_between))
        .with_state(state);

    router = router.layer(TraceLayer::new_for_http());

    if cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// The HTTP server.
pub struct Server {
    settings: ServerSettings,
    state: Arc<AppState>,
}

impl Server {
    pub fn new(settings: ServerSettings, state: AppState) -> Self {
        Self {
            settings,
            state: Arc::new(state),
        }
    }

    pub fn router(&self) -> Router {
        router(self.state.clone(), self.settings.cors)
    }

    /// Serves until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind.
    pub async fn run(self) -> Result<()> {
        let router = self.router();
        let addr = self.settings.address();

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!(addr = %listener.local_addr()?, cors = self.settings.cors, "Serving Hawaii climate API");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
