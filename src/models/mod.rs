mod campaign;
mod stats;
mod story;
mod user_profile;

pub use campaign::{Campaign, CampaignCatalog, Tenant};
pub use stats::DirectoryStats;
pub use story::{ColorTag, IconTag, SectionKind, StorySection, StorySectionView};
pub use user_profile::{
    AttributionDecision, AttributionSignal, AttributionStatus, AttributionWindow, DailyImpression,
    UserProfile,
};
