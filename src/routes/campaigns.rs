use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::models::CampaignCatalog;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(fetch_campaigns))
}

async fn fetch_campaigns() -> Json<CampaignCatalog> {
    info!("GET /campaigns - Fetching tenant and campaign reference lists");
    Json(CampaignCatalog::builtin())
}
