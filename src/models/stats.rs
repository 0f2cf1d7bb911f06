use serde::{Deserialize, Serialize};

/// Directory-wide aggregates backing the dashboard's header cards.
///
/// `attribution_rate` is expressed in percent (e.g., 50.0 for 50%).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStats {
    pub total_users: usize,
    pub attributed: usize,
    pub not_attributed: usize,
    pub partial: usize,
    pub attribution_rate: f64,
    pub total_attributed_ftd: u32,
    pub total_attributed_ftd_value: f64,
    pub total_attributed_purchases: u32,
    pub total_attributed_purchase_value: f64,
}
