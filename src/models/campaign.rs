use serde::{Deserialize, Serialize};

/// Advertiser tenant the review dashboard is scoped to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
}

/// Reference lists for the dashboard's tenant and campaign dropdowns.
///
/// Hand-maintained alongside the sample dataset; profile records may still
/// carry campaign names outside this list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignCatalog {
    pub tenants: Vec<Tenant>,
    pub campaigns: Vec<Campaign>,
}

impl CampaignCatalog {
    pub fn builtin() -> Self {
        let tenant = |id: &str, name: &str| Tenant {
            id: id.to_string(),
            name: name.to_string(),
        };
        let campaign = |id: &str, name: &str| Campaign {
            id: id.to_string(),
            name: name.to_string(),
        };

        Self {
            tenants: vec![tenant("shuffle", "Shuffle"), tenant("50k_trade", "50K Trade")],
            campaigns: vec![
                campaign("q4_crypto_gamblers", "Q4 Crypto Gamblers"),
                campaign("holiday_promo_2025", "Holiday Promo 2025"),
                campaign("vip_reactivation", "VIP Reactivation"),
                campaign("new_year_rush", "New Year Rush"),
                campaign("affiliate_push", "Affiliate Q4 Push"),
            ],
        }
    }
}
