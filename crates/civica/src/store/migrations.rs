//! Database schema migrations

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Run all necessary migrations to bring the database up to date
pub fn run_migrations(conn: &Connection) -> Result<()> {
  let current_version = get_schema_version(conn)?;

  if current_version < 1 {
    migrate_v1(conn)?;
  }

  Ok(())
}

/// Get the current schema version from the database
fn get_schema_version(conn: &Connection) -> Result<i32> {
  let table_exists: bool = conn
    .query_row(
      "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='schema_version'",
      [],
      |row| row.get(0),
    )
    .unwrap_or(false);

  if !table_exists {
    return Ok(0);
  }

  let version: i32 =
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0)).unwrap_or(0);

  Ok(version)
}

/// Initial schema: the four core tables
fn migrate_v1(conn: &Connection) -> Result<()> {
  conn
    .execute_batch(
      r#"
      BEGIN;

      CREATE TABLE schema_version (
          version INTEGER PRIMARY KEY,
          applied_at TEXT NOT NULL DEFAULT (datetime('now'))
      );

      CREATE TABLE issues (
          id TEXT PRIMARY KEY,
          location TEXT NOT NULL,
          category TEXT NOT NULL,
          description TEXT NOT NULL,
          attached_file TEXT,
          submitted_at TEXT NOT NULL
      );

      CREATE TABLE events (
          id TEXT PRIMARY KEY,
          title TEXT NOT NULL,
          date TEXT NOT NULL,
          category TEXT NOT NULL,
          description TEXT NOT NULL
      );

      CREATE TABLE search_history (
          id TEXT PRIMARY KEY,
          user_id TEXT NOT NULL,
          keyword TEXT,
          category TEXT,
          searched_at TEXT NOT NULL,
          result_count INTEGER NOT NULL,
          search_type TEXT NOT NULL
      );

      CREATE TABLE user_preferences (
          id TEXT PRIMARY KEY,
          user_id TEXT NOT NULL,
          category TEXT NOT NULL,
          score REAL NOT NULL,
          search_count INTEGER NOT NULL,
          last_updated TEXT NOT NULL,
          UNIQUE (user_id, category)
      );

      CREATE INDEX idx_issues_submitted_at ON issues(submitted_at);
      CREATE INDEX idx_events_date ON events(date);
      CREATE INDEX idx_events_category ON events(category);
      CREATE INDEX idx_search_history_searched_at ON search_history(searched_at);
      CREATE INDEX idx_user_preferences_user ON user_preferences(user_id);

      INSERT INTO schema_version (version) VALUES (1);

      COMMIT;
      "#,
    )
    .context("Failed to apply schema v1")?;

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_migrations_reach_current_version() {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);

    // Running again must be a no-op
    run_migrations(&conn).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), SCHEMA_VERSION);
  }
}
