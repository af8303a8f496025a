//! Server bootstrap
//!
//! Router assembly and the HTTP serve loop.

use axum::Router;
use axum::middleware as axum_middleware;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::auth;
use crate::core::{Config, ServerState};
use crate::gql;

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config, state: None }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Build a router with all routes registered (no middleware, no state)
    pub fn build_router() -> Router<ServerState> {
        Router::new()
            // GraphQL endpoint + GraphiQL
            .merge(gql::router())
            // Health API - public route
            .merge(api::health::router())
    }

    /// Build the fully configured application with middleware and state
    pub fn build_app(state: &ServerState) -> Router {
        Self::build_router()
            // CORS - handle cross-origin requests
            .layer(CorsLayer::permissive())
            // Request tracing
            .layer(TraceLayer::new_for_http())
            // Identity context (JWT) - injects CurrentUser when a token is present
            .layer(axum_middleware::from_fn_with_state(
                state.clone(),
                auth::middleware::attach_user,
            ))
            .with_state(state.clone())
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let app = Self::build_app(&state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("eats-server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
            })
            .await?;

        Ok(())
    }
}
