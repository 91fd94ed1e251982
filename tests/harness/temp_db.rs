use std::path::{Path, PathBuf};

use roster::adapter::outbound::sqlite::database::connection::{open, DbPool, PoolSettings};
use roster::adapter::outbound::sqlite::store::SqliteStudentStore;
use roster::application::roster::Roster;
use tempfile::TempDir;

/// Temporary SQLite database for integration tests.
pub struct TempDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(format!("roster-{name}.db"));
        let pool = open(&path.display().to_string(), &PoolSettings::default())
            .expect("open sqlite database");

        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn roster(&self) -> Roster<SqliteStudentStore> {
        Roster::new(SqliteStudentStore::new(self.pool.clone()))
    }
}
