//! Campaign domain errors
//!
//! This module defines all error types that can occur within the
//! campaign domain.

use thiserror::Error;

use core_kernel::CoreError;

/// Errors that can occur in the campaign domain
#[derive(Debug, Error)]
pub enum CampaignError {
    /// A draft entity failed field validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// The seed plan cannot produce a consistent dataset
    #[error("Invalid seed plan: {0}")]
    InvalidSeedPlan(String),
}

impl From<CoreError> for CampaignError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(msg) => CampaignError::Validation(msg),
        }
    }
}
