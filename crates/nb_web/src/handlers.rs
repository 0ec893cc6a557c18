use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::heatmap;
use crate::AppState;

const DEFAULT_DIGEST_LIMIT: usize = 5;

#[derive(Debug, Serialize)]
pub struct SourceInfo {
    pub name: &'static str,
    pub emoji: &'static str,
    pub listing_url: &'static str,
}

pub async fn list_sources(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let sources: Vec<SourceInfo> = state
        .pipeline
        .sources()
        .into_iter()
        .map(|meta| SourceInfo {
            name: meta.name,
            emoji: meta.emoji,
            listing_url: meta.listing_url,
        })
        .collect();
    Json(sources)
}

#[derive(Debug, Default, Deserialize)]
pub struct DigestRequest {
    pub limit: Option<usize>,
}

pub async fn create_digest(
    State(state): State<Arc<AppState>>,
    request: Option<Json<DigestRequest>>,
) -> Response {
    let limit = request
        .and_then(|Json(r)| r.limit)
        .unwrap_or(DEFAULT_DIGEST_LIMIT);
    match state.pipeline.fetch_and_summarize(limit).await {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => {
            error!(error = %e, "on-demand digest failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HeatmapInfo {
    pub id: usize,
    pub path: String,
}

pub async fn list_heatmaps(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let images: Vec<HeatmapInfo> = state
        .heatmap_images
        .iter()
        .enumerate()
        .map(|(id, path)| HeatmapInfo {
            id,
            path: path.display().to_string(),
        })
        .collect();
    Json(images)
}

pub async fn get_heatmap(
    State(state): State<Arc<AppState>>,
    Path(id): Path<usize>,
) -> Response {
    let Some(path) = state.heatmap_images.get(id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match heatmap::render_png(path) {
        Ok(bytes) => ([(header::CONTENT_TYPE, "image/png")], bytes).into_response(),
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to render heatmap");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
