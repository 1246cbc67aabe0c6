//! Database connection settings.

use std::time::Duration;

use serde::Deserialize;

use crate::adapter::outbound::sqlite::database::connection::PoolOptions;

/// Environment variable that overrides [`DatabaseConfig::url`].
pub const DATABASE_URL_ENV: &str = "USERDB_DATABASE_URL";

/// Connection settings for the target database.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite path or URL. May carry credentials; never log it unredacted.
    pub url: String,

    /// Maximum pooled connections.
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection.
    pub connect_timeout_secs: u64,

    /// Milliseconds SQLite waits on a locked database before giving up.
    /// A second bootstrap runner relies on this to wait for the first.
    pub busy_timeout_ms: u32,
}

impl DatabaseConfig {
    #[must_use]
    pub const fn pool_options(&self) -> PoolOptions {
        PoolOptions {
            max_connections: self.max_connections,
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            busy_timeout_ms: self.busy_timeout_ms,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "userdb.db".into(),
            max_connections: 4,
            connect_timeout_secs: 5,
            busy_timeout_ms: 5000,
        }
    }
}
