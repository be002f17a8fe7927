//! # HTTP Server
//!
//! Assembles the grid routes into a served router.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;
use crate::session::{self, SessionRegistry, SessionResult};

use super::config::ServerConfig;
use super::routes::{grid_routes, AppState};

/// HTTP server for the record store API
pub struct GridServer {
    config: ServerConfig,
    router: Router,
}

impl GridServer {
    /// Create a server from configuration; loads the seed dataset once.
    pub fn new(config: ServerConfig) -> SessionResult<Self> {
        let template = session::load_template(&config.seed_path)?;
        Logger::info(
            "seed_loaded",
            &[
                ("path", &config.seed_path.display().to_string()),
                ("records", &template.len().to_string()),
            ],
        );

        let registry = SessionRegistry::with_ttl(template, config.session_ttl_secs);
        let state = Arc::new(AppState::new(
            registry,
            config.fake_delay_ms,
            config.session_ttl_secs,
        ));
        let router = Self::build_router(&config, state);

        Ok(Self { config, router })
    }

    fn build_router(config: &ServerConfig, state: Arc<AppState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // Permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        grid_routes(state).layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        Logger::info(
            "server_started",
            &[
                ("addr", &addr.to_string()),
                ("delay_ms", &self.config.fake_delay_ms.to_string()),
                ("session_ttl_secs", &self.config.session_ttl_secs.to_string()),
            ],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
