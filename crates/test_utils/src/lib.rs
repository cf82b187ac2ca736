//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! campaign system test suite.
//!
//! # Modules
//!
//! - `fixtures`: In-memory port and pre-built campaign data
//! - `database`: PostgreSQL testcontainer management
//! - `assertions`: Ownership and selection checks for stored data
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
