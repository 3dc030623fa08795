use std::path::{Path, PathBuf};

use log::LevelFilter;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection, Executor};

pub mod queries;
mod score;

pub use score::*;

const CREATE_SCORES_TABLE: &str = "CREATE TABLE IF NOT EXISTS scores (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    score INTEGER NOT NULL,
    difficulty TEXT NOT NULL,
    created_at REAL NOT NULL
)";

const CREATE_SCORES_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_scores ON scores (score DESC, created_at ASC)";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to create database directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Sql(#[from] sqlx::Error),
}

/// Handle to the single file-backed score store.
///
/// Holds only the connection options; every operation opens its own
/// connection and drops it when done.
#[derive(Clone, Debug)]
pub struct Storage {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Storage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .log_statements(LevelFilter::Debug);
        Self { path, options }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn connect(&self) -> sqlx::Result<SqliteConnection> {
        self.options.connect().await
    }

    /// Creates the `scores` table and its ranking index if they are missing.
    /// Safe to call on every startup.
    pub async fn init(&self) -> Result<(), StorageError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| StorageError::CreateDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        let mut conn = self.connect().await?;
        conn.execute(CREATE_SCORES_TABLE).await?;
        conn.execute(CREATE_SCORES_INDEX).await?;
        conn.close().await?;
        Ok(())
    }

    /// Runs a trivial query against the store.
    pub async fn ping(&self) -> sqlx::Result<()> {
        let mut conn = self.connect().await?;
        conn.execute("SELECT 1").await?;
        conn.close().await
    }
}
