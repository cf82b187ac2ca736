//! Target entity
//!
//! A target is a shared, named location that contracts point at. Targets are
//! referenced by contract links but never owned by them, so removing a
//! contract or campaign leaves every target in place.

use serde::{Deserialize, Serialize};

use core_kernel::{require_non_blank, TargetId};

use crate::error::CampaignError;

/// A persisted target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Storage-assigned identifier
    pub id: TargetId,
    /// Display name, e.g. a city
    pub name: String,
}

/// A target that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTarget {
    name: String,
}

impl NewTarget {
    /// Creates a target draft
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::Validation` if the name is blank
    pub fn new(name: impl Into<String>) -> Result<Self, CampaignError> {
        let name = name.into();
        require_non_blank("target name", &name)?;
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
