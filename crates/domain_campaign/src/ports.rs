//! Campaign Domain Ports
//!
//! This module defines the port interface the campaign domain needs from its
//! data source. The PostgreSQL adapter in `infra_db` is the production
//! implementation; `test_utils` provides an in-memory one.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_campaign::{CampaignPort, CampaignService};
//! use std::sync::Arc;
//!
//! let port: Arc<dyn CampaignPort> = Arc::new(PostgresCampaignAdapter::new(pool));
//! let service = CampaignService::new(port);
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::campaign::Campaign;

/// Read access to stored campaigns
#[async_trait]
pub trait CampaignPort: DomainPort {
    /// Returns every stored campaign in storage order
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, PortError>;
}
