//! Campaign domain services

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{CampaignId, PortError};

use crate::campaign::Campaign;
use crate::ports::CampaignPort;

/// The externally visible shape of a campaign
///
/// Contracts and their targets are left out so a listing never expands
/// into the whole object graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub id: CampaignId,
    pub name: String,
}

impl From<Campaign> for CampaignSummary {
    fn from(campaign: Campaign) -> Self {
        Self {
            id: campaign.id,
            name: campaign.name,
        }
    }
}

/// Service for reading campaigns
#[derive(Clone)]
pub struct CampaignService {
    port: Arc<dyn CampaignPort>,
}

impl CampaignService {
    /// Creates a service backed by the given port
    pub fn new(port: Arc<dyn CampaignPort>) -> Self {
        Self { port }
    }

    /// Returns every campaign as a summary
    ///
    /// An empty store yields an empty list.
    ///
    /// # Errors
    ///
    /// Propagates the port's error if storage cannot be read
    pub async fn get_all_campaigns(&self) -> Result<Vec<CampaignSummary>, PortError> {
        let campaigns = self.port.list_campaigns().await?;
        debug!(count = campaigns.len(), "Loaded campaigns");

        Ok(campaigns.into_iter().map(CampaignSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use core_kernel::DomainPort;

    struct FixedPort(Vec<Campaign>);

    impl DomainPort for FixedPort {}

    #[async_trait]
    impl CampaignPort for FixedPort {
        async fn list_campaigns(&self) -> Result<Vec<Campaign>, PortError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_summaries_keep_id_and_name() {
        let service = CampaignService::new(Arc::new(FixedPort(vec![Campaign {
            id: CampaignId::new(1),
            name: "캠페인 0".to_string(),
        }])));

        let summaries = service.get_all_campaigns().await.unwrap();
        assert_eq!(
            summaries,
            vec![CampaignSummary {
                id: CampaignId::new(1),
                name: "캠페인 0".to_string(),
            }]
        );
    }
}
