//! PostgreSQL Campaign Adapter
//!
//! Implements the campaign domain's `CampaignPort` on top of the
//! `CampaignRepository`, translating `DatabaseError` into `PortError`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::PostgresCampaignAdapter;
//! use domain_campaign::CampaignPort;
//! use std::sync::Arc;
//!
//! let port: Arc<dyn CampaignPort> = Arc::new(PostgresCampaignAdapter::new(pool));
//! let campaigns = port.list_campaigns().await?;
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::{instrument, warn};

use core_kernel::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_campaign::{Campaign, CampaignPort};

use crate::repositories::CampaignRepository;

const ADAPTER_ID: &str = "postgres-campaign-adapter";

/// PostgreSQL-backed implementation of the CampaignPort trait
#[derive(Debug, Clone)]
pub struct PostgresCampaignAdapter {
    repository: CampaignRepository,
    pool: PgPool,
}

impl PostgresCampaignAdapter {
    /// Creates a new PostgreSQL campaign adapter
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CampaignRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresCampaignAdapter {}

#[async_trait]
impl CampaignPort for PostgresCampaignAdapter {
    #[instrument(skip(self))]
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, PortError> {
        self.repository.find_all().await.map_err(|e| {
            warn!(error = %e, "Failed to list campaigns");
            PortError::from(e)
        })
    }
}

#[async_trait]
impl HealthCheckable for PostgresCampaignAdapter {
    /// Checks database connectivity with a `SELECT 1`
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        let (status, message) = match result {
            Ok(_) => (AdapterHealth::Healthy, None),
            Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
        };

        HealthCheckResult {
            adapter_id: ADAPTER_ID.to_string(),
            status,
            latency_ms,
            message,
            checked_at: Utc::now(),
        }
    }
}
