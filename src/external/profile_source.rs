use async_trait::async_trait;
use thiserror::Error;

use crate::models::UserProfile;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),
}

/// Startup-time supplier of the directory's profiles.
///
/// The directory itself is immutable once built; sources only run during
/// boot, so a broken dataset fails the process instead of a request.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn load(&self) -> Result<Vec<UserProfile>, SourceError>;
}
