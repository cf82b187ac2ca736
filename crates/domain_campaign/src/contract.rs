//! Contract and contract-target entities
//!
//! Every contract belongs to exactly one campaign and owns its
//! `ContractTarget` links. A link references one contract and one target;
//! the same pair may appear more than once.

use serde::{Deserialize, Serialize};

use core_kernel::{require_non_blank, CampaignId, ContractId, ContractTargetId, TargetId};

use crate::error::CampaignError;

/// A persisted contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Storage-assigned identifier
    pub id: ContractId,
    /// Owning campaign
    pub campaign_id: CampaignId,
    /// Contract title
    pub title: String,
}

/// A contract that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContract {
    campaign_id: CampaignId,
    title: String,
}

impl NewContract {
    /// Creates a contract draft under the given campaign
    ///
    /// # Arguments
    ///
    /// * `campaign_id` - The owning campaign
    /// * `title` - Contract title
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::Validation` if the title is blank
    pub fn new(campaign_id: CampaignId, title: impl Into<String>) -> Result<Self, CampaignError> {
        let title = title.into();
        require_non_blank("contract title", &title)?;
        Ok(Self { campaign_id, title })
    }

    pub fn campaign_id(&self) -> CampaignId {
        self.campaign_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// A persisted link between a contract and a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTarget {
    pub id: ContractTargetId,
    pub contract_id: ContractId,
    pub target_id: TargetId,
}

/// A contract-target link that has not been stored yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewContractTarget {
    pub contract_id: ContractId,
    pub target_id: TargetId,
}

impl NewContractTarget {
    pub fn new(contract_id: ContractId, target_id: TargetId) -> Self {
        Self { contract_id, target_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contract_keeps_owner() {
        let draft = NewContract::new(CampaignId::new(3), "캠페인 3 - 청약 0").unwrap();
        assert_eq!(draft.campaign_id(), CampaignId::new(3));
        assert_eq!(draft.title(), "캠페인 3 - 청약 0");
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(NewContract::new(CampaignId::new(1), "").is_err());
    }
}
