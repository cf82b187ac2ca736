//! Campaign entity
//!
//! A campaign is the top-level grouping. It exclusively owns its contracts:
//! the storage layer removes every contract (and their target links) when a
//! campaign is deleted.

use serde::{Deserialize, Serialize};

use core_kernel::{require_non_blank, CampaignId};

use crate::error::CampaignError;

/// A persisted campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    /// Storage-assigned identifier
    pub id: CampaignId,
    /// Campaign name
    pub name: String,
}

/// A campaign that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCampaign {
    name: String,
}

impl NewCampaign {
    /// Creates a campaign draft
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::Validation` if the name is blank
    pub fn new(name: impl Into<String>) -> Result<Self, CampaignError> {
        let name = name.into();
        require_non_blank("campaign name", &name)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
