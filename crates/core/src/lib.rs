//! Margindesk Core - domain entities, services, and traits.
//!
//! This crate contains the margin replication reporting logic. It is
//! database-agnostic and defines repository traits that are implemented
//! by the `margindesk-storage-sqlite` crate.

pub mod brokers;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod pbactual;
pub mod positions;
pub mod reporting;
pub mod utils;

// Re-export the broker enum; nearly every consumer needs it
pub use brokers::PrimeBroker;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
