//! Application startup and lifecycle management.

use crate::config::Service2Config;
use crate::handlers::{health_check, hello, metrics};
use axum::{middleware::from_fn, routing::get, Router};
use service_core::error::{not_found, AppError};
use service_core::middleware::{make_request_span, metrics_middleware, request_id_middleware};
use service_core::utils::shutdown_signal;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub fn build_router() -> Router {
    Router::new()
        .route("/service2/hello", get(hello))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .fallback(not_found)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
}

impl Application {
    /// Bind the listener (port 0 = random port for testing).
    pub async fn build(config: Service2Config) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("service2 listening on port {}", port);

        Ok(Self { port, listener })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT/SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, build_router())
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
