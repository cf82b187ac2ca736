//! Core Kernel - Foundational types for the campaign system
//!
//! This crate provides the building blocks used across all other crates:
//! - Strongly-typed identifiers for storage-generated keys
//! - The shared `CoreError` type and field validation helpers
//! - Port/adapter infrastructure (`PortError`, `DomainPort`, health checks)

pub mod identifiers;
pub mod error;
pub mod ports;

pub use identifiers::{CampaignId, ContractId, ContractTargetId, TargetId};
pub use error::{require_non_blank, CoreError};
pub use ports::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError};
