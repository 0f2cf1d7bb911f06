use serde::{Deserialize, Serialize};

/// One row of the attribution review table: everything the pipeline knows
/// about a single tracked user.
///
/// Date-stamped fields are kept as the raw strings the ingestion side
/// produces (`"YYYY-MM-DD[ HH:MM:SS[.mmm]][ UTC]"`); parsing them is the job
/// of `utils::dates`, so a malformed value degrades per-field instead of
/// poisoning the whole record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Cross-surface tracking identifier assigned by the measurement SDK.
    pub sdk_strong_id: String,

    /// User id received from the advertiser's platform once linked.
    pub advertiser_user_id: Option<String>,

    /// First time the advertiser id was observed, raw date string.
    pub advertiser_id_first_seen: Option<String>,

    /// Advertiser-side first deposit, raw date string.
    pub advertiser_first_ftd: Option<String>,

    pub first_time_seen: Option<String>,
    pub first_time_ftd: Option<String>,
    pub first_time_attributed_ftd: Option<String>,
    pub first_time_attributed: Option<String>,

    #[serde(default)]
    pub days_visit_before_attributed: u32,

    #[serde(default)]
    pub total_attributed_ftd: u32,
    #[serde(default)]
    pub total_attributed_ftd_value: f64,
    #[serde(default)]
    pub total_attributed_purchase: u32,
    #[serde(default)]
    pub total_attributed_purchase_value: f64,

    #[serde(default)]
    pub daily_imps: Vec<DailyImpression>,

    #[serde(default)]
    pub attribution: AttributionDecision,

    // Display-only fields: shown in the table and searched, never read by
    // the narrative generator.
    #[serde(default)]
    pub banners: String,
    #[serde(default)]
    pub daily_clicks: u32,
    #[serde(default)]
    pub all_wallets: String,
    #[serde(default)]
    pub primary_country: String,
    #[serde(default)]
    pub balance_group: String,
    #[serde(default)]
    pub wallet_providers: String,
}

/// Impressions served to the user on one domain on one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyImpression {
    pub date: String,
    pub domain: String,
    #[serde(default)]
    pub count: u32,
}

/// How (and whether) this user's conversion was credited to a campaign.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributionDecision {
    #[serde(default)]
    pub status: AttributionStatus,
    #[serde(default)]
    pub signal: AttributionSignal,
    pub window: Option<AttributionWindow>,
    pub campaign: Option<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributionStatus {
    Attributed,
    #[default]
    NotAttributed,
    Partial,
}

/// Which kind of ad interaction carried the credit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributionSignal {
    PostView,
    PostClick,
    #[default]
    None,
}

impl AttributionSignal {
    /// Narrative label, `None` when no signal carried the credit.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            AttributionSignal::PostView => Some("post-view"),
            AttributionSignal::PostClick => Some("post-click"),
            AttributionSignal::None => None,
        }
    }
}

/// Attribution lookback window the crediting rule ran with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributionWindow {
    #[serde(rename = "7d")]
    SevenDay,
    #[serde(rename = "30d")]
    ThirtyDay,
}

impl AttributionWindow {
    pub fn label(&self) -> &'static str {
        match self {
            AttributionWindow::SevenDay => "7-day",
            AttributionWindow::ThirtyDay => "30-day",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_with_missing_optionals() {
        let raw = r#"{
            "sdkStrongId": "3f2a9c1d4e5b6a7f8091b2c3d4e5f601",
            "advertiserUserId": null,
            "advertiserIdFirstSeen": null,
            "advertiserFirstFtd": null,
            "firstTimeSeen": "2025-12-18",
            "firstTimeFtd": null,
            "firstTimeAttributedFtd": null,
            "firstTimeAttributed": null
        }"#;

        let profile: UserProfile = serde_json::from_str(raw).expect("partial profile should parse");
        assert_eq!(profile.sdk_strong_id, "3f2a9c1d4e5b6a7f8091b2c3d4e5f601");
        assert_eq!(profile.first_time_seen.as_deref(), Some("2025-12-18"));
        assert!(profile.daily_imps.is_empty());
        assert_eq!(profile.attribution.status, AttributionStatus::NotAttributed);
        assert_eq!(profile.attribution.signal, AttributionSignal::None);
    }

    #[test]
    fn test_attribution_enums_use_wire_names() {
        let raw = r#"{
            "status": "attributed",
            "signal": "post_view",
            "window": "7d",
            "campaign": "Q4 Crypto Gamblers",
            "reason": "impression within window"
        }"#;

        let decision: AttributionDecision = serde_json::from_str(raw).expect("decision should parse");
        assert_eq!(decision.status, AttributionStatus::Attributed);
        assert_eq!(decision.signal, AttributionSignal::PostView);
        assert_eq!(decision.window, Some(AttributionWindow::SevenDay));

        let back = serde_json::to_value(&decision).expect("decision should serialize");
        assert_eq!(back["status"], "attributed");
        assert_eq!(back["signal"], "post_view");
        assert_eq!(back["window"], "7d");
    }

    #[test]
    fn test_signal_and_window_labels() {
        assert_eq!(AttributionSignal::PostClick.label(), Some("post-click"));
        assert_eq!(AttributionSignal::None.label(), None);
        assert_eq!(AttributionWindow::ThirtyDay.label(), "30-day");
    }
}
