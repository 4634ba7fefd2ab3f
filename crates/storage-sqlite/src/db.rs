//! Connection pooling for the two data sources.
//!
//! Each source gets its own pool; the repositories decide which one they
//! hold. Reads are bounded by the connection busy timeout, and callers wrap
//! whole queries in [`with_retry`] so one transient connectivity failure
//! does not fail a reporting request.

use std::sync::Arc;
use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use log::warn;

use margindesk_core::errors::{DatabaseError, Result};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

const RETRY_BACKOFF: Duration = Duration::from_millis(250);

#[derive(Debug)]
struct ConnectionCustomizer;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(
        &self,
        conn: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        conn.batch_execute(
            "PRAGMA busy_timeout = 30000;
             PRAGMA foreign_keys = ON;",
        )
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = Pool::builder()
        .max_size(8)
        .min_idle(Some(1)) // Keep at least one connection ready
        .connection_timeout(Duration::from_secs(30))
        .connection_customizer(Box::new(ConnectionCustomizer))
        .build(manager)
        .map_err(|e| DatabaseError::PoolCreationFailed(e.to_string()))?;
    Ok(Arc::new(pool))
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get()
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()).into())
}

/// Run a read operation, retrying once after a short backoff when the
/// failure is transient (connection or pool trouble, not a bad query).
pub fn with_retry<T>(operation: impl Fn() -> Result<T>) -> Result<T> {
    match operation() {
        Err(err) if err.is_transient() => {
            warn!("transient data source failure, retrying once: {}", err);
            std::thread::sleep(RETRY_BACKOFF);
            operation()
        }
        other => other,
    }
}
