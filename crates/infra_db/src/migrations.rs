//! Schema migrations
//!
//! The SQL files live in the workspace-level `migrations/` directory and are
//! embedded at compile time.

use sqlx::migrate::Migrator;
use sqlx::PgPool;
use tracing::info;

use crate::error::DatabaseError;

/// Embedded migrator for the campaign schema
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Applies any pending migrations
///
/// # Errors
///
/// Returns `DatabaseError::MigrationFailed` if a migration cannot be applied
pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    info!("Running database migrations");

    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

    info!("Database schema up to date");
    Ok(())
}
