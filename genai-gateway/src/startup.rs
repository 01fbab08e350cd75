use crate::config::GatewayConfig;
use crate::handlers;
use crate::services::providers::GenerativeProvider;
use crate::services::TransientStore;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use gateway_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Upload cap applied to all request bodies.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: GatewayConfig,
    pub store: TransientStore,
    pub provider: Arc<dyn GenerativeProvider>,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration and backend.
    ///
    /// The provider is injected rather than constructed here so tests can
    /// substitute a fake backend.
    pub async fn build(
        config: GatewayConfig,
        provider: Arc<dyn GenerativeProvider>,
    ) -> Result<Self, AppError> {
        let store = TransientStore::new(&config.storage.upload_dir)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to initialize transient storage at {}: {}",
                    config.storage.upload_dir,
                    e
                );
                e
            })?;

        let state = AppState {
            config: config.clone(),
            store,
            provider,
        };

        let router = Router::new()
            .route("/", get(handlers::index))
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/generate-text", post(handlers::generate_text))
            .route("/generate-from-image", post(handlers::generate_from_image))
            .route(
                "/generate-from-document",
                post(handlers::generate_from_document),
            )
            .route("/generate-from-audio", post(handlers::generate_from_audio))
            .fallback_service(ServeDir::new("public"))
            .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on (useful with port 0).
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped by SIGINT/SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
