use crate::models::UserProfile;

/// Hand-authored review dataset: six personas covering the journey shapes
/// the dashboard is demoed with (clean post-view attribution, expired
/// window, fast post-click, dormant reactivation with partial credit,
/// organic signup, and a journey whose impressions straddle the FTD day).
pub const SAMPLE_USERS_JSON: &str = include_str!("sample_users.json");

pub fn sample_profiles() -> Result<Vec<UserProfile>, serde_json::Error> {
    serde_json::from_str(SAMPLE_USERS_JSON)
}
