//! Issues repository

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::Store;
use crate::models::Issue;

impl Store {
  /// Persist a new issue report
  pub fn insert_issue(&self, issue: &Issue) -> Result<()> {
    self.with_connection(|conn| insert_issue_impl(conn, issue))
  }

  /// All issues, newest first
  pub fn issues_newest_first(&self) -> Result<Vec<Issue>> {
    self.with_connection(|conn| issues_newest_first_impl(conn, None))
  }

  /// The most recently submitted issues, newest first
  pub fn recent_issues(&self, limit: u32) -> Result<Vec<Issue>> {
    self.with_connection(|conn| issues_newest_first_impl(conn, Some(limit)))
  }

  pub fn count_issues(&self) -> Result<i64> {
    self.with_connection(|conn| {
      conn
        .query_row("SELECT COUNT(*) FROM issues", [], |row| row.get(0))
        .context("Failed to count issues")
    })
  }
}

fn insert_issue_impl(conn: &Connection, issue: &Issue) -> Result<()> {
  conn
    .execute(
      r#"
      INSERT INTO issues (id, location, category, description, attached_file, submitted_at)
      VALUES (?1, ?2, ?3, ?4, ?5, ?6)
      "#,
      params![
        issue.id,
        issue.location,
        issue.category,
        issue.description,
        issue.attached_file,
        issue.submitted_at,
      ],
    )
    .context("Failed to insert issue")?;

  Ok(())
}

fn issues_newest_first_impl(conn: &Connection, limit: Option<u32>) -> Result<Vec<Issue>> {
  let sql = match limit {
    Some(_) => {
      "SELECT id, location, category, description, attached_file, submitted_at
       FROM issues ORDER BY submitted_at DESC LIMIT ?1"
    }
    None => {
      "SELECT id, location, category, description, attached_file, submitted_at
       FROM issues ORDER BY submitted_at DESC"
    }
  };

  let mut stmt = conn.prepare(sql).context("Failed to prepare issues query")?;

  let map_row = |row: &rusqlite::Row<'_>| {
    Ok(Issue {
      id: row.get(0)?,
      location: row.get(1)?,
      category: row.get(2)?,
      description: row.get(3)?,
      attached_file: row.get(4)?,
      submitted_at: row.get(5)?,
    })
  };

  let rows = match limit {
    Some(n) => stmt.query_map(params![n], map_row),
    None => stmt.query_map([], map_row),
  }
  .context("Failed to query issues")?;

  let mut issues = Vec::new();
  for issue in rows {
    issues.push(issue?);
  }
  Ok(issues)
}
