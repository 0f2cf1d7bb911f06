use async_trait::async_trait;

use crate::external::profile_source::{ProfileSource, SourceError};
use crate::models::UserProfile;
use crate::store::sample;

/// Default source: the sample dataset compiled into the binary.
pub struct EmbeddedSource;

#[async_trait]
impl ProfileSource for EmbeddedSource {
    fn name(&self) -> &'static str {
        "embedded"
    }

    async fn load(&self) -> Result<Vec<UserProfile>, SourceError> {
        sample::sample_profiles().map_err(|e| SourceError::Parse(e.to_string()))
    }
}
