//! Contract repository implementation

use sqlx::{FromRow, PgConnection, PgPool};
use tracing::{info, instrument};

use core_kernel::{CampaignId, ContractId};
use domain_campaign::{Contract, NewContract};

use crate::error::DatabaseError;
use crate::repositories::CascadeSummary;

/// Repository for the `contract` table
#[derive(Debug, Clone)]
pub struct ContractRepository {
    pool: PgPool,
}

impl ContractRepository {
    /// Creates a new ContractRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a contract on the caller's connection or transaction
    ///
    /// # Errors
    ///
    /// Returns a foreign key violation (as `DatabaseError::SqlError`) if the
    /// owning campaign does not exist
    #[instrument(skip(self, conn, contract), fields(campaign_id = %contract.campaign_id()))]
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        contract: &NewContract,
    ) -> Result<Contract, DatabaseError> {
        let row = sqlx::query_as::<_, ContractRow>(
            r#"
            INSERT INTO contract (title, campaign_id)
            VALUES ($1, $2)
            RETURNING id, title, campaign_id
            "#,
        )
        .bind(contract.title())
        .bind(contract.campaign_id().value())
        .fetch_one(&mut *conn)
        .await?;

        Ok(row.into())
    }

    /// Retrieves every contract in insertion order
    pub async fn find_all(&self) -> Result<Vec<Contract>, DatabaseError> {
        let rows = sqlx::query_as::<_, ContractRow>(
            "SELECT id, title, campaign_id FROM contract ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Contract::from).collect())
    }

    /// Retrieves the contracts owned by a campaign in insertion order
    pub async fn find_by_campaign(&self, campaign_id: CampaignId) -> Result<Vec<Contract>, DatabaseError> {
        let rows = sqlx::query_as::<_, ContractRow>(
            r#"
            SELECT id, title, campaign_id
            FROM contract
            WHERE campaign_id = $1
            ORDER BY id
            "#,
        )
        .bind(campaign_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Contract::from).collect())
    }

    /// Counts all contracts
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        self.count_in(&mut conn).await
    }

    /// Counts all contracts as seen by the caller's connection or transaction
    pub async fn count_in(&self, conn: &mut PgConnection) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contract")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }

    /// Deletes a contract together with its target links
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if the contract does not exist
    #[instrument(skip(self), fields(contract_id = %id))]
    pub async fn delete(&self, id: ContractId) -> Result<CascadeSummary, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let contract_targets = sqlx::query("DELETE FROM contract_target WHERE contract_id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let contracts = sqlx::query("DELETE FROM contract WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if contracts == 0 {
            return Err(DatabaseError::not_found("Contract", id));
        }

        tx.commit().await?;

        let summary = CascadeSummary {
            campaigns: 0,
            contracts,
            contract_targets,
        };
        info!(?summary, "Contract deleted");
        Ok(summary)
    }
}

/// Database row for contract
#[derive(Debug, Clone, FromRow)]
pub struct ContractRow {
    pub id: i64,
    pub title: String,
    pub campaign_id: i64,
}

impl From<ContractRow> for Contract {
    fn from(row: ContractRow) -> Self {
        Self {
            id: ContractId::new(row.id),
            campaign_id: CampaignId::new(row.campaign_id),
            title: row.title,
        }
    }
}
