//! Repository implementations for domain entities
//!
//! One repository per table. Each holds a connection pool for reads;
//! inserts take an explicit `&mut PgConnection` so several of them can be
//! composed into one caller-owned transaction (see `crate::seed`).

use sqlx::PgConnection;

use crate::error::DatabaseError;

pub mod campaign;
pub mod contract;
pub mod contract_target;
pub mod target;

pub use campaign::CampaignRepository;
pub use contract::ContractRepository;
pub use contract_target::ContractTargetRepository;
pub use target::TargetRepository;

/// Rows removed by a cascading delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeSummary {
    pub campaigns: u64,
    pub contracts: u64,
    pub contract_targets: u64,
}

/// Empties every table and restarts the key sequences
///
/// Runs on the caller's connection, so inside a transaction the previous
/// rows come back if the transaction rolls back.
pub async fn clear_all(conn: &mut PgConnection) -> Result<(), DatabaseError> {
    sqlx::query("TRUNCATE TABLE contract_target, contract, campaign, target RESTART IDENTITY")
        .execute(&mut *conn)
        .await?;
    Ok(())
}
