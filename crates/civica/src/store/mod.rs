//! SQLite persistence for issues, events, search history, and preferences

pub mod events;
pub mod history;
pub mod issues;
pub mod migrations;

use anyhow::{anyhow, Context, Result};
use rusqlite::Connection;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Store that owns the SQLite connection
pub struct Store {
  conn: Mutex<Connection>,
  db_path: PathBuf,
}

impl Store {
  /// Open (or create) the database at the given path and migrate it
  pub fn open(db_path: &Path) -> Result<Self> {
    if let Some(parent) = db_path.parent() {
      std::fs::create_dir_all(parent).context("Failed to create database directory")?;
    }

    let conn = Connection::open(db_path).context("Failed to open database")?;

    conn.execute("PRAGMA foreign_keys = ON", []).context("Failed to enable foreign keys")?;

    migrations::run_migrations(&conn).context("Failed to run database migrations")?;

    tracing::info!(path = %db_path.display(), "database initialized");

    Ok(Self { conn: Mutex::new(conn), db_path: db_path.to_path_buf() })
  }

  /// Open the database at the configured default location
  pub fn open_default() -> Result<Self> {
    Self::open(&default_db_path()?)
  }

  /// Execute a function with access to the database connection
  pub fn with_connection<F, T>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&Connection) -> Result<T>,
  {
    let conn =
      self.conn.lock().map_err(|e| anyhow!("Failed to lock database connection: {}", e))?;
    f(&conn)
  }

  /// Execute a function with a mutable connection, for transactions
  pub fn with_connection_mut<F, T>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&mut Connection) -> Result<T>,
  {
    let mut conn =
      self.conn.lock().map_err(|e| anyhow!("Failed to lock database connection: {}", e))?;
    f(&mut conn)
  }

  pub fn db_path(&self) -> &Path {
    &self.db_path
  }
}

/// Resolve the database path: `CIVICA_DB` env var, else the platform data dir
pub fn default_db_path() -> Result<PathBuf> {
  if let Ok(path) = env::var("CIVICA_DB") {
    return Ok(PathBuf::from(path));
  }

  let data_dir =
    dirs::data_dir().ok_or_else(|| anyhow!("Could not determine user data directory"))?;
  Ok(data_dir.join("civica").join("civica.db"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn test_store_creation() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");

    let store = Store::open(&db_path).unwrap();
    assert!(db_path.exists());

    // All four tables exist and start empty
    store
      .with_connection(|conn| {
        for table in ["issues", "events", "search_history", "user_preferences"] {
          let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
          assert_eq!(count, 0, "{table} should start empty");
        }
        Ok(())
      })
      .unwrap();
  }

  #[test]
  fn test_reopen_is_idempotent() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");

    Store::open(&db_path).unwrap();
    Store::open(&db_path).unwrap();
  }
}
