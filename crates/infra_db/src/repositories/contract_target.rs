//! Contract-target link repository implementation
//!
//! Links are created one row per (contract, target) selection. The table
//! has no uniqueness constraint, so inserting the same pair twice stores
//! two rows.

use sqlx::{FromRow, PgConnection, PgPool};

use core_kernel::{ContractId, ContractTargetId, TargetId};
use domain_campaign::{ContractTarget, NewContractTarget};

use crate::error::DatabaseError;

/// Repository for the `contract_target` table
#[derive(Debug, Clone)]
pub struct ContractTargetRepository {
    pool: PgPool,
}

impl ContractTargetRepository {
    /// Creates a new ContractTargetRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a link on the caller's connection or transaction
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        link: &NewContractTarget,
    ) -> Result<ContractTarget, DatabaseError> {
        let row = sqlx::query_as::<_, ContractTargetRow>(
            r#"
            INSERT INTO contract_target (contract_id, target_id)
            VALUES ($1, $2)
            RETURNING id, contract_id, target_id
            "#,
        )
        .bind(link.contract_id.value())
        .bind(link.target_id.value())
        .fetch_one(&mut *conn)
        .await?;

        Ok(row.into())
    }

    /// Retrieves every link in insertion order
    pub async fn find_all(&self) -> Result<Vec<ContractTarget>, DatabaseError> {
        let rows = sqlx::query_as::<_, ContractTargetRow>(
            "SELECT id, contract_id, target_id FROM contract_target ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ContractTarget::from).collect())
    }

    /// Retrieves the links owned by a contract in insertion order
    pub async fn find_by_contract(
        &self,
        contract_id: ContractId,
    ) -> Result<Vec<ContractTarget>, DatabaseError> {
        let rows = sqlx::query_as::<_, ContractTargetRow>(
            r#"
            SELECT id, contract_id, target_id
            FROM contract_target
            WHERE contract_id = $1
            ORDER BY id
            "#,
        )
        .bind(contract_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ContractTarget::from).collect())
    }

    /// Counts all links
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        self.count_in(&mut conn).await
    }

    /// Counts all links as seen by the caller's connection or transaction
    pub async fn count_in(&self, conn: &mut PgConnection) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contract_target")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }
}

/// Database row for contract_target
#[derive(Debug, Clone, FromRow)]
pub struct ContractTargetRow {
    pub id: i64,
    pub contract_id: i64,
    pub target_id: i64,
}

impl From<ContractTargetRow> for ContractTarget {
    fn from(row: ContractTargetRow) -> Self {
        Self {
            id: ContractTargetId::new(row.id),
            contract_id: ContractId::new(row.contract_id),
            target_id: TargetId::new(row.target_id),
        }
    }
}
