//! Campaign DTOs

use serde::{Deserialize, Serialize};

use domain_campaign::CampaignSummary;

/// One entry of the campaign listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignResponse {
    pub id: i64,
    pub name: String,
}

impl From<CampaignSummary> for CampaignResponse {
    fn from(summary: CampaignSummary) -> Self {
        Self {
            id: summary.id.value(),
            name: summary.name,
        }
    }
}
