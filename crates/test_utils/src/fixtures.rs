//! Pre-built Test Fixtures
//!
//! Provides an in-memory `CampaignPort` and ready-made campaign data so the
//! service and HTTP layers can be tested without a database.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use core_kernel::{
    AdapterHealth, CampaignId, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};
use domain_campaign::{Campaign, CampaignPort, SeedPlan};

/// Campaigns named the way the startup seed names them, with ids 1..=count
pub fn seeded_campaigns(count: usize) -> Vec<Campaign> {
    let plan = SeedPlan::default();
    (0..count)
        .map(|index| Campaign {
            id: CampaignId::new(index as i64 + 1),
            name: plan.campaign_name(index),
        })
        .collect()
}

/// A seed plan small enough for quick database tests
pub fn small_seed_plan() -> SeedPlan {
    SeedPlan {
        target_names: vec!["서울".to_string(), "대전".to_string(), "대구".to_string(), "부산".to_string()],
        campaign_count: 2,
        contracts_per_campaign: 3,
        targets_per_contract: 1..=3,
    }
}

/// In-memory `CampaignPort` backed by a vector
///
/// Can be switched into a failing mode to exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCampaignPort {
    campaigns: Arc<RwLock<Vec<Campaign>>>,
    unavailable: bool,
}

impl InMemoryCampaignPort {
    /// Creates a port holding the given campaigns
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        Self {
            campaigns: Arc::new(RwLock::new(campaigns)),
            unavailable: false,
        }
    }

    /// Creates a port holding the ten startup campaigns
    pub fn seeded() -> Self {
        Self::new(seeded_campaigns(SeedPlan::default().campaign_count))
    }

    /// Creates a port whose storage is unreachable
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Appends a campaign, assigning the next id
    pub fn push(&self, name: impl Into<String>) -> Campaign {
        let mut campaigns = self.campaigns.write().expect("campaign store poisoned");
        let next_id = campaigns.iter().map(|c| c.id.value()).max().unwrap_or(0) + 1;
        let campaign = Campaign {
            id: CampaignId::new(next_id),
            name: name.into(),
        };
        campaigns.push(campaign.clone());
        campaign
    }
}

impl DomainPort for InMemoryCampaignPort {}

#[async_trait]
impl CampaignPort for InMemoryCampaignPort {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, PortError> {
        if self.unavailable {
            return Err(PortError::connection("campaign store unreachable"));
        }
        Ok(self.campaigns.read().expect("campaign store poisoned").clone())
    }
}

#[async_trait]
impl HealthCheckable for InMemoryCampaignPort {
    async fn health_check(&self) -> HealthCheckResult {
        let (status, message) = if self.unavailable {
            (AdapterHealth::Unhealthy, Some("campaign store unreachable".to_string()))
        } else {
            (AdapterHealth::Healthy, None)
        };

        HealthCheckResult {
            adapter_id: "in-memory-campaign-port".to_string(),
            status,
            latency_ms: 0,
            message,
            checked_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_campaign_names() {
        let campaigns = seeded_campaigns(10);
        assert_eq!(campaigns.len(), 10);
        assert_eq!(campaigns[0].name, "캠페인 0");
        assert_eq!(campaigns[9].id, CampaignId::new(10));
    }

    #[test]
    fn test_small_plan_is_valid() {
        assert!(small_seed_plan().validate().is_ok());
    }

    #[tokio::test]
    async fn test_push_assigns_next_id() {
        let port = InMemoryCampaignPort::seeded();
        let added = port.push("캠페인 10");

        assert_eq!(added.id, CampaignId::new(11));
        assert_eq!(port.list_campaigns().await.unwrap().len(), 11);
    }

    #[tokio::test]
    async fn test_unavailable_port_fails() {
        let port = InMemoryCampaignPort::unavailable();
        assert!(port.list_campaigns().await.is_err());
        assert!(!port.health_check().await.is_healthy());
    }
}
