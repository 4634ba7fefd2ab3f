//! SQLite storage implementation for margindesk.
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. It implements the repository traits defined in `margindesk-core`
//! against the two externally owned data sources:
//!
//! - the margin replica (`margin_replica_adjusted` table)
//! - the prime-broker actuals feed (`pbactualmargin` table)
//!
//! Both sources are read-only from this application's point of view; this
//! crate never creates, migrates, or writes those tables.

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod pbactual;
pub mod positions;

// Re-export database utilities
pub use db::{create_pool, get_connection, with_retry, DbConnection, DbPool};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from margindesk-core for convenience
pub use margindesk_core::errors::{DatabaseError, Error, Result};
