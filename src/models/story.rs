use serde::{Deserialize, Serialize};

use crate::utils::dates::EventDate;

/// The closed set of timeline block kinds the narrative generator can emit.
///
/// Icon and color are derived from the kind here, at the rendering boundary,
/// so the generator stays free of presentation concerns and no two sections
/// of the same kind can disagree on their look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    FirstSeen,
    ExposureBegins,
    ContinuedExposure,
    AdditionalExposure,
    IdentityLinked,
    FirstDeposit,
    OngoingValue,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::FirstSeen => "First Seen",
            SectionKind::ExposureBegins => "Ad Exposure Begins",
            SectionKind::ContinuedExposure => "Continued Exposure",
            SectionKind::AdditionalExposure => "Additional Ad Exposure",
            SectionKind::IdentityLinked => "User ID provided by Advertiser",
            SectionKind::FirstDeposit => "First Time Deposit (FTD)",
            SectionKind::OngoingValue => "Ongoing Value",
        }
    }

    pub fn icon(&self) -> IconTag {
        match self {
            SectionKind::FirstSeen
            | SectionKind::ExposureBegins
            | SectionKind::ContinuedExposure
            | SectionKind::AdditionalExposure => IconTag::Eye,
            SectionKind::IdentityLinked => IconTag::User,
            SectionKind::FirstDeposit => IconTag::DollarSign,
            SectionKind::OngoingValue => IconTag::TrendingUp,
        }
    }

    pub fn color(&self) -> ColorTag {
        match self {
            SectionKind::FirstSeen => ColorTag::Amber,
            SectionKind::ExposureBegins
            | SectionKind::ContinuedExposure
            | SectionKind::AdditionalExposure => ColorTag::Purple,
            SectionKind::IdentityLinked => ColorTag::Blue,
            SectionKind::FirstDeposit => ColorTag::Yellow,
            SectionKind::OngoingValue => ColorTag::Indigo,
        }
    }
}

/// Icon identifier for the renderer; the UI maps these to its icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconTag {
    Eye,
    User,
    DollarSign,
    TrendingUp,
}

/// Color identifier for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Amber,
    Purple,
    Blue,
    Yellow,
    Indigo,
}

/// One narrative block of a user's attribution story.
///
/// Produced fresh on every generator call; carries no identity and is never
/// stored. `date` is absent for summary blocks and for events whose raw date
/// string did not parse; undated sections sort after all dated ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorySection {
    pub kind: SectionKind,
    pub title: String,
    pub content: String,
    pub date: Option<EventDate>,
}

impl StorySection {
    pub fn new(kind: SectionKind, content: String, date: Option<EventDate>) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            content,
            date,
        }
    }
}

/// A `StorySection` decorated for the renderer with its icon and color tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StorySectionView {
    pub kind: SectionKind,
    pub title: String,
    pub icon: IconTag,
    pub color: ColorTag,
    pub content: String,
    pub date: Option<EventDate>,
}

impl From<StorySection> for StorySectionView {
    fn from(section: StorySection) -> Self {
        Self {
            icon: section.kind.icon(),
            color: section.kind.color(),
            kind: section.kind,
            title: section.title,
            content: section.content,
            date: section.date,
        }
    }
}
