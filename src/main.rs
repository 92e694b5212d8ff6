use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod handlers;
mod models;
mod seed;
mod store;

use crate::config::Config;
use crate::store::Store;

/// Shared application state. Cheap to clone; the store sits behind an Arc.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,storefront_api=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("Storefront API: in-memory catalog, mock checkout");

    let state = AppState::new(Store::new());
    let app = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Catalog ─────────────────────────────────────────────────────────
        .route("/api/products", get(handlers::products::list_products))
        .route("/api/products/:id", get(handlers::products::get_product))

        // ── Admin (unauthenticated) ─────────────────────────────────────────
        .route(
            "/api/admin/products",
            post(handlers::products::create_product),
        )

        // ── Checkout ────────────────────────────────────────────────────────
        .route("/api/checkout", post(handlers::checkout::checkout))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
