//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling and the per-connection pragmas every
//! connection needs before it touches the schema.

use std::time::Duration;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::SqliteConnection;
use tracing::debug;

use crate::error::{Error, Result};

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Pool sizing and connection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolOptions {
    /// Maximum number of pooled connections.
    pub max_connections: u32,
    /// How long to wait for a connection before failing.
    pub connect_timeout: Duration,
    /// How long SQLite waits on a locked database before returning busy.
    pub busy_timeout_ms: u32,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: 4,
            connect_timeout: Duration::from_secs(5),
            busy_timeout_ms: 5000,
        }
    }
}

/// Applies [`configure_sqlite_connection`] to every pooled connection.
#[derive(Debug, Clone, Copy)]
struct Pragmas {
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for Pragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), diesel::r2d2::Error> {
        configure_sqlite_connection(conn, self.busy_timeout_ms)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a connection pool for the given database URL.
///
/// # Errors
/// Returns [`Error::Connection`] if no connection can be opened within the
/// configured timeout.
pub fn create_pool(database_url: &str, options: PoolOptions) -> Result<DbPool> {
    debug!(
        database = %redact_url(database_url),
        max_connections = options.max_connections,
        "Creating connection pool"
    );
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(options.max_connections)
        .connection_timeout(options.connect_timeout)
        .connection_customizer(Box::new(Pragmas {
            busy_timeout_ms: options.busy_timeout_ms,
        }))
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))
}

/// Open a single configured connection outside any pool.
///
/// # Errors
/// Returns [`Error::Connection`] if the database cannot be opened.
pub fn connect(database_url: &str, busy_timeout_ms: u32) -> Result<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)?;
    configure_sqlite_connection(&mut conn, busy_timeout_ms)
        .map_err(|e| Error::Connection(e.to_string()))?;
    Ok(conn)
}

/// Enable foreign-key enforcement and set the busy timeout.
///
/// Must run outside a transaction: SQLite ignores `foreign_keys` changes
/// inside one.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(
    conn: &mut SqliteConnection,
    busy_timeout_ms: u32,
) -> QueryResult<()> {
    diesel::sql_query("PRAGMA foreign_keys = ON").execute(conn)?;
    diesel::sql_query(format!("PRAGMA busy_timeout = {busy_timeout_ms}")).execute(conn)?;
    Ok(())
}

/// Strip `user:password@` from a URL so it can be logged.
#[must_use]
pub fn redact_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let rest = &url[scheme_end + 3..];
    let authority_end = rest.find('/').unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}://***@{}", &url[..scheme_end], &rest[at + 1..]),
        None => url.to_string(),
    }
}
