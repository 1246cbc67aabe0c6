use std::path::{Path, PathBuf};

use diesel::SqliteConnection;
use tempfile::TempDir;
use userdb::adapter::outbound::sqlite::database::connection::{
    connect, create_pool, DbPool, PoolOptions,
};

/// Temporary on-disk SQLite database for integration tests.
///
/// The file lives in its own directory, removed on drop. Nothing is created
/// until the first connection opens it.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("userdb-{name}-"))
            .tempdir()
            .expect("create temp dir");
        let path = dir.path().join(format!("{name}.db"));
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn url(&self) -> String {
        self.path.display().to_string()
    }

    pub fn pool(&self) -> DbPool {
        create_pool(&self.url(), PoolOptions::default()).expect("create sqlite pool")
    }

    pub fn connect(&self) -> SqliteConnection {
        connect(&self.url(), 5000).expect("open sqlite connection")
    }
}
