use crate::errors::AppError;
use crate::models::{DirectoryStats, StorySectionView, UserProfile};
use crate::services::story_service;
use crate::store::UserDirectory;

/// Route-facing directory operations: same lookups the store exposes, with
/// blank-query rejection and missing-record mapping handled here so every
/// handler stays a one-liner.
pub fn list_users(directory: &UserDirectory) -> Vec<UserProfile> {
    directory.all().to_vec()
}

pub fn search_users(directory: &UserDirectory, query: &str) -> Result<Vec<UserProfile>, AppError> {
    let query = normalized_query(query)?;
    Ok(directory
        .search(&query)
        .into_iter()
        .cloned()
        .collect())
}

pub fn get_user(directory: &UserDirectory, id: &str) -> Result<UserProfile, AppError> {
    directory.get(id).cloned().ok_or(AppError::NotFound)
}

pub fn user_story(directory: &UserDirectory, id: &str) -> Result<Vec<StorySectionView>, AppError> {
    let user = directory.get(id).ok_or(AppError::NotFound)?;
    Ok(story_service::generate_user_story_views(user))
}

/// The explainer flow: first match for the query, paired with its story.
pub fn lookup_user(
    directory: &UserDirectory,
    query: &str,
) -> Result<(UserProfile, Vec<StorySectionView>), AppError> {
    let query = normalized_query(query)?;
    let user = directory.find_first(&query).ok_or(AppError::NotFound)?;
    Ok((user.clone(), story_service::generate_user_story_views(user)))
}

pub fn directory_stats(directory: &UserDirectory) -> DirectoryStats {
    directory.stats()
}

fn normalized_query(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "query must not be blank".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
