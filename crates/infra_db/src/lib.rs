//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL persistence for the campaign system
//! using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern, providing data access abstractions
//! that hide the database implementation details from the domain layer:
//!
//! - `repositories`: one repository per table, with cascading deletes
//! - `adapters`: `CampaignPort` implementation for the service layer
//! - `seed`: the transactional startup dataset writer
//! - `migrations`: embedded schema migrations
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig, TestDataInitializer};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/campaigns")).await?;
//! run_migrations(&pool).await?;
//! let report = TestDataInitializer::new(pool.clone()).run().await?;
//! ```

pub mod pool;
pub mod error;
pub mod migrations;
pub mod repositories;
pub mod adapters;
pub mod seed;

pub use pool::{create_pool, DatabaseConfig, DatabasePool};
pub use error::DatabaseError;
pub use migrations::{run_migrations, MIGRATOR};
pub use repositories::CascadeSummary;
pub use adapters::PostgresCampaignAdapter;
pub use seed::TestDataInitializer;
