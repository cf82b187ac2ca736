//! Target repository implementation
//!
//! Targets are shared reference data. Nothing in this repository deletes
//! them; contract links point at targets without owning them.

use sqlx::{FromRow, PgConnection, PgPool};
use tracing::instrument;

use core_kernel::TargetId;
use domain_campaign::{NewTarget, Target};

use crate::error::DatabaseError;

/// Repository for the `target` table
#[derive(Debug, Clone)]
pub struct TargetRepository {
    pool: PgPool,
}

impl TargetRepository {
    /// Creates a new TargetRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a target on the caller's connection or transaction
    ///
    /// # Returns
    ///
    /// The stored target with its generated identifier
    #[instrument(skip(self, conn, target), fields(name = %target.name()))]
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        target: &NewTarget,
    ) -> Result<Target, DatabaseError> {
        let row = sqlx::query_as::<_, TargetRow>(
            r#"
            INSERT INTO target (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(target.name())
        .fetch_one(&mut *conn)
        .await?;

        Ok(row.into())
    }

    /// Retrieves every target in insertion order
    pub async fn find_all(&self) -> Result<Vec<Target>, DatabaseError> {
        let rows = sqlx::query_as::<_, TargetRow>("SELECT id, name FROM target ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Target::from).collect())
    }

    /// Retrieves a target by its identifier
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no such target exists
    pub async fn find_by_id(&self, id: TargetId) -> Result<Target, DatabaseError> {
        sqlx::query_as::<_, TargetRow>("SELECT id, name FROM target WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?
            .map(Target::from)
            .ok_or_else(|| DatabaseError::not_found("Target", id))
    }

    /// Counts all targets
    pub async fn count(&self) -> Result<i64, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        self.count_in(&mut conn).await
    }

    /// Counts all targets as seen by the caller's connection or transaction
    pub async fn count_in(&self, conn: &mut PgConnection) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM target")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count)
    }
}

/// Database row for target
#[derive(Debug, Clone, FromRow)]
pub struct TargetRow {
    pub id: i64,
    pub name: String,
}

impl From<TargetRow> for Target {
    fn from(row: TargetRow) -> Self {
        Self {
            id: TargetId::new(row.id),
            name: row.name,
        }
    }
}
