//! HTTP server assembly

pub mod handlers;
pub mod router;

pub use router::build_invoice_routes;

use crate::actions::ActionContext;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state for the invoice handlers.
#[derive(Clone)]
pub struct AppState {
    pub ctx: Arc<ActionContext>,
}

impl AppState {
    pub fn new(ctx: ActionContext) -> Self {
        Self { ctx: Arc::new(ctx) }
    }
}

/// Build the application router with request tracing.
pub fn build_app(state: AppState) -> Router {
    build_invoice_routes(state).layer(TraceLayer::new_for_http())
}

/// Bind `addr` and serve the application until the task is cancelled.
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let app = build_app(state);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
