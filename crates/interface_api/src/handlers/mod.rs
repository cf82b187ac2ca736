//! Request handlers

pub mod campaign;
pub mod health;
