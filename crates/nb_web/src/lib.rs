use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use nb_core::Result;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod handlers;
pub mod heatmap;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/sources", get(handlers::list_sources))
        .route("/api/digest", post(handlers::create_digest))
        .route("/api/heatmaps", get(handlers::list_heatmaps))
        .route("/api/heatmaps/:id", get(handlers::get_heatmap))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!(host, port, "🌐 viewer listening");
    axum::serve(listener, app).await?;
    Ok(())
}
