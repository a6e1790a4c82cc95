use crate::config::ApiConfig;
use crate::routes::{self, AppState};
use crate::ApiError;
use axum::routing::{get, post};
use axum::Router;
use reporting_db::DatabasePool;
use std::future::Future;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// REST API Server
pub struct ApiServer {
    config: ApiConfig,
    state: AppState,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(config: ApiConfig, db: Arc<DatabasePool>) -> Self {
        Self {
            config,
            state: AppState { db },
        }
    }

    /// Build the router; separate from [`run`](Self::run) so tests can drive
    /// it without a listener
    pub fn router(&self) -> Router {
        let routes = Router::new()
            .route("/", get(routes::index))
            .route("/total_spent", get(routes::total_spent))
            .route("/top_products", get(routes::top_products))
            .route("/top_suppliers", get(routes::top_suppliers))
            .route("/create_order", post(routes::create_order))
            .with_state(self.state.clone());

        let router = if self.config.api_prefix.is_empty() {
            routes
        } else {
            Router::new().nest(&self.config.api_prefix, routes)
        };

        let cors = if self.config.cors_enabled {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
        };

        router.layer(cors).layer(TraceLayer::new_for_http())
    }

    /// Start the server; runs until `shutdown` resolves
    pub async fn run<F>(self, shutdown: F) -> crate::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.address();
        let app = self.router();

        info!(address = %addr, "Starting API server");

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ApiError::Server(e.to_string()))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ApiError::Server(e.to_string()))?;

        Ok(())
    }
}
