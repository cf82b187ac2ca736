//! Domain Adapters
//!
//! Adapter implementations for domain ports, connecting domain interfaces
//! to the PostgreSQL database layer.

pub mod campaign;

pub use campaign::PostgresCampaignAdapter;
