use async_trait::async_trait;

use crate::external::profile_source::{ProfileSource, SourceError};
use crate::models::UserProfile;

/// Loads a JSON array of profiles from disk, so an analyst can review a
/// fresh dataset cut without rebuilding the binary.
pub struct JsonFileSource {
    path: String,
}

impl JsonFileSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Result<Self, SourceError> {
        let path = std::env::var("DATASET_PATH")
            .map_err(|_| SourceError::Config("DATASET_PATH not set".into()))?;
        Ok(Self::new(path))
    }
}

#[async_trait]
impl ProfileSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn load(&self) -> Result<Vec<UserProfile>, SourceError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        serde_json::from_str(&raw).map_err(|e| SourceError::Parse(e.to_string()))
    }
}
