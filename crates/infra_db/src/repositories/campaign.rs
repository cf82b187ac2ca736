//! Campaign repository implementation
//!
//! Campaigns own their contracts, and contracts own their target links.
//! The schema's foreign keys do not cascade, so `delete` removes the whole
//! ownership tree itself, bottom-up, inside one transaction.

use sqlx::{FromRow, PgConnection, PgPool};
use tracing::{info, instrument};

use core_kernel::CampaignId;
use domain_campaign::{Campaign, NewCampaign};

use crate::error::DatabaseError;
use crate::repositories::CascadeSummary;

/// Repository for the `campaign` table
#[derive(Debug, Clone)]
pub struct CampaignRepository {
    pool: PgPool,
}

impl CampaignRepository {
    /// Creates a new CampaignRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a campaign on the caller's connection or transaction
    #[instrument(skip(self, conn, campaign), fields(name = %campaign.name()))]
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        campaign: &NewCampaign,
    ) -> Result<Campaign, DatabaseError> {
        let row = sqlx::query_as::<_, CampaignRow>(
            r#"
            INSERT INTO campaign (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(campaign.name())
        .fetch_one(&mut *conn)
        .await?;

        Ok(row.into())
    }

    /// Writes the campaign's current fields back to storage
    ///
    /// Children are stored through their own repositories, so for a
    /// freshly inserted campaign this leaves the row unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the campaign no longer exists
    pub async fn save(
        &self,
        conn: &mut PgConnection,
        campaign: &Campaign,
    ) -> Result<Campaign, DatabaseError> {
        sqlx::query_as::<_, CampaignRow>(
            r#"
            UPDATE campaign
            SET name = $2
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(campaign.id.value())
        .bind(&campaign.name)
        .fetch_optional(&mut *conn)
        .await?
        .map(Campaign::from)
        .ok_or_else(|| DatabaseError::not_found("Campaign", campaign.id))
    }

    /// Retrieves every campaign in insertion order
    pub async fn find_all(&self) -> Result<Vec<Campaign>, DatabaseError> {
        let rows = sqlx::query_as::<_, CampaignRow>("SELECT id, name FROM campaign ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Campaign::from).collect())
    }

    /// Retrieves a campaign by its identifier
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no such campaign exists
    pub async fn find_by_id(&self, id: CampaignId) -> Result<Campaign, DatabaseError> {
        sqlx::query_as::<_, CampaignRow>("SELECT id, name FROM campaign WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?
            .map(Campaign::from)
            .ok_or_else(|| DatabaseError::not_found("Campaign", id))
    }

    /// Counts all campaigns
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        self.count_in(&mut conn).await
    }

    /// Counts all campaigns as seen by the caller's connection or transaction
    pub async fn count_in(&self, conn: &mut PgConnection) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM campaign")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }

    /// Deletes a campaign together with its contracts and their target links
    ///
    /// Targets are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the campaign does not exist; in
    /// that case nothing is deleted
    #[instrument(skip(self), fields(campaign_id = %id))]
    pub async fn delete(&self, id: CampaignId) -> Result<CascadeSummary, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let contract_targets = sqlx::query(
            r#"
            DELETE FROM contract_target
            WHERE contract_id IN (SELECT id FROM contract WHERE campaign_id = $1)
            "#,
        )
        .bind(id.value())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let contracts = sqlx::query("DELETE FROM contract WHERE campaign_id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let campaigns = sqlx::query("DELETE FROM campaign WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if campaigns == 0 {
            return Err(DatabaseError::not_found("Campaign", id));
        }

        tx.commit().await?;

        let summary = CascadeSummary {
            campaigns,
            contracts,
            contract_targets,
        };
        info!(?summary, "Campaign deleted");
        Ok(summary)
    }
}

/// Database row for campaign
#[derive(Debug, Clone, FromRow)]
pub struct CampaignRow {
    pub id: i64,
    pub name: String,
}

impl From<CampaignRow> for Campaign {
    fn from(row: CampaignRow) -> Self {
        Self {
            id: CampaignId::new(row.id),
            name: row.name,
        }
    }
}
