//! HTTP server.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use http::Method;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::ServerError;
use crate::handlers::AppState;
use crate::routes::create_router;

/// Default listen address.
pub const DEFAULT_LISTEN: &str = "127.0.0.1:8080";

/// Server options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub listen: String,
    /// Allow cross-origin GET requests from any origin.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
            cors: false,
        }
    }
}

impl ServerConfig {
    /// Parse the listen address.
    pub fn addr(&self) -> Result<SocketAddr, ServerError> {
        self.listen
            .parse()
            .map_err(|_| ServerError::InvalidAddress(self.listen.clone()))
    }
}

/// Build the router with tracing and, when enabled, CORS.
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let mut app = create_router(state);

    if config.cors {
        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any)
            .allow_origin(Any);
        app = app.layer(cors);
    }

    app.layer(TraceLayer::new_for_http())
}

/// The lookup HTTP server.
pub struct LookupServer {
    config: ServerConfig,
    state: AppState,
}

impl LookupServer {
    /// Create a server.
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Bind the listen address.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let addr = self.config.addr()?;
        TcpListener::bind(addr).await.map_err(|source| ServerError::Bind {
            addr: addr.to_string(),
            source,
        })
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = build_app(self.state, &self.config);

        if let Ok(addr) = listener.local_addr() {
            info!("Lookup server listening on http://{}", addr);
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.await;
                info!("Lookup server shutting down");
            })
            .await?;

        Ok(())
    }

    /// Bind and serve until Ctrl-C.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = self.bind().await?;
        self.serve(listener, shutdown_signal()).await
    }
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
