use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{campaigns, health, stats, users};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    // The dashboard UI is served from a different origin.
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/users", users::router())
        .nest("/api/stats", stats::router())
        .nest("/api/campaigns", campaigns::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
