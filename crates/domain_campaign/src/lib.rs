//! Campaign Domain
//!
//! This crate holds the campaign data model and the logic that sits on top
//! of it, independent of any storage engine.
//!
//! # Ownership
//!
//! ```text
//! Campaign ──owns──> Contract ──owns──> ContractTarget ──refs──> Target
//! ```
//!
//! Deleting a campaign removes its contracts and their links. Targets are
//! shared and are never removed by a cascade.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_campaign::{CampaignService, SeedPlan};
//!
//! let service = CampaignService::new(port);
//! let summaries = service.get_all_campaigns().await?;
//! ```

pub mod campaign;
pub mod contract;
pub mod target;
pub mod seed;
pub mod ports;
pub mod services;
pub mod error;

pub use campaign::{Campaign, NewCampaign};
pub use contract::{Contract, ContractTarget, NewContract, NewContractTarget};
pub use target::{NewTarget, Target};
pub use seed::{sample_targets, SeedPlan, SeedReport, DEFAULT_TARGET_NAMES};
pub use ports::CampaignPort;
pub use services::{CampaignService, CampaignSummary};
pub use error::CampaignError;
