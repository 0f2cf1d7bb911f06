use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::models::DirectoryStats;
use crate::services::directory_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(fetch_stats))
}

async fn fetch_stats(State(state): State<AppState>) -> Json<DirectoryStats> {
    info!("GET /stats - Computing directory stats");
    Json(directory_service::directory_stats(&state.directory))
}
