use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{StorySectionView, UserProfile};
use crate::services::directory_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_users))
        .route("/search", get(search_users))
        .route("/lookup", get(lookup_user))
        .route("/:id", get(get_user))
        .route("/:id/story", get(get_user_story))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub user: UserProfile,
    pub story: Vec<StorySectionView>,
}

async fn fetch_users(State(state): State<AppState>) -> Json<Vec<UserProfile>> {
    info!("GET /users - Fetching all profiles");
    Json(directory_service::list_users(&state.directory))
}

async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<UserProfile>>, AppError> {
    let q = params.q.unwrap_or_default();
    info!("GET /users/search - Searching profiles (q: {:?})", q);
    let users = directory_service::search_users(&state.directory, &q).map_err(|e| {
        error!("Failed to search profiles: {}", e);
        e
    })?;
    Ok(Json(users))
}

/// First match for the query, paired with its generated story. Backs the
/// explainer page's single lookup box.
#[axum::debug_handler]
async fn lookup_user(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<LookupResponse>, AppError> {
    let q = params.q.unwrap_or_default();
    info!("GET /users/lookup - Resolving first match (q: {:?})", q);
    let (user, story) = directory_service::lookup_user(&state.directory, &q).map_err(|e| {
        error!("Failed to resolve lookup {:?}: {}", q, e);
        e
    })?;
    Ok(Json(LookupResponse { user, story }))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    info!("GET /users/{} - Fetching profile", id);
    let user = directory_service::get_user(&state.directory, &id).map_err(|e| {
        error!("Failed to fetch profile {}: {}", id, e);
        e
    })?;
    Ok(Json(user))
}

async fn get_user_story(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StorySectionView>>, AppError> {
    info!("GET /users/{}/story - Generating attribution story", id);
    let story = directory_service::user_story(&state.directory, &id).map_err(|e| {
        error!("Failed to generate story for {}: {}", id, e);
        e
    })?;
    Ok(Json(story))
}
