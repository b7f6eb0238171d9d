//! Persistence and configuration models shared across the service.

#[cfg(feature = "server")]
pub mod config;
pub mod sales_rep;
