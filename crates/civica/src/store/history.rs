//! Search history log and user preference rows

use anyhow::{Context, Result};
use rusqlite::{params, Connection, Row};

use super::Store;
use crate::models::{CategoryCount, SearchRecord, SearchType, UserPreference};

impl Store {
  /// Append a search record and, when given, upsert the preference row for
  /// its category. Both writes happen in a single transaction.
  pub fn record_search(
    &self,
    record: &SearchRecord,
    preference: Option<&UserPreference>,
  ) -> Result<()> {
    self.with_connection_mut(|conn| {
      let tx = conn.transaction().context("Failed to begin transaction")?;

      tx.execute(
        r#"
        INSERT INTO search_history
          (id, user_id, keyword, category, searched_at, result_count, search_type)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#,
        params![
          record.id,
          record.user_id,
          record.keyword,
          record.category,
          record.searched_at,
          record.result_count,
          record.search_type.as_str(),
        ],
      )
      .context("Failed to insert search record")?;

      if let Some(pref) = preference {
        tx.execute(
          r#"
          INSERT INTO user_preferences (id, user_id, category, score, search_count, last_updated)
          VALUES (?1, ?2, ?3, ?4, ?5, ?6)
          ON CONFLICT (user_id, category) DO UPDATE SET
            score = excluded.score,
            search_count = excluded.search_count,
            last_updated = excluded.last_updated
          "#,
          params![
            pref.id,
            pref.user_id,
            pref.category,
            pref.score,
            pref.search_count,
            pref.last_updated,
          ],
        )
        .context("Failed to upsert preference")?;
      }

      tx.commit().context("Failed to commit search record")?;
      Ok(())
    })
  }

  /// Preference row for a user and category, if one exists. The category is
  /// matched against its normalized (lowercased) stored form.
  pub fn find_preference(&self, user_id: &str, category: &str) -> Result<Option<UserPreference>> {
    self.with_connection(|conn| {
      let mut stmt = conn
        .prepare(
          "SELECT id, user_id, category, score, search_count, last_updated
           FROM user_preferences WHERE user_id = ?1 AND category = ?2",
        )
        .context("Failed to prepare preference query")?;

      let mut rows = stmt
        .query_map(params![user_id, category.to_lowercase()], preference_from_row)
        .context("Failed to query preference")?;

      rows.next().transpose().context("Failed to read preference row")
    })
  }

  /// All preference rows for a user
  pub fn preferences_for_user(&self, user_id: &str) -> Result<Vec<UserPreference>> {
    self.with_connection(|conn| {
      let mut stmt = conn
        .prepare(
          "SELECT id, user_id, category, score, search_count, last_updated
           FROM user_preferences WHERE user_id = ?1",
        )
        .context("Failed to prepare preferences query")?;

      let rows =
        stmt.query_map(params![user_id], preference_from_row).context("Failed to query preferences")?;

      let mut preferences = Vec::new();
      for pref in rows {
        preferences.push(pref?);
      }
      Ok(preferences)
    })
  }

  /// Platform-wide categories ranked by successful-search frequency
  pub fn popular_categories(&self, limit: u32) -> Result<Vec<CategoryCount>> {
    self.with_connection(|conn| {
      category_counts(
        conn,
        "SELECT LOWER(category), COUNT(*) AS n FROM search_history
         WHERE category IS NOT NULL AND result_count > 0
         GROUP BY LOWER(category) ORDER BY n DESC LIMIT ?1",
        limit,
      )
    })
  }

  /// Platform-wide categories ranked by search frequency, successful or not
  pub fn top_search_categories(&self, limit: u32) -> Result<Vec<CategoryCount>> {
    self.with_connection(|conn| {
      category_counts(
        conn,
        "SELECT LOWER(category), COUNT(*) AS n FROM search_history
         WHERE category IS NOT NULL
         GROUP BY LOWER(category) ORDER BY n DESC LIMIT ?1",
        limit,
      )
    })
  }

  pub fn total_searches(&self) -> Result<i64> {
    self.with_connection(|conn| {
      conn
        .query_row("SELECT COUNT(*) FROM search_history", [], |row| row.get(0))
        .context("Failed to count searches")
    })
  }

  pub fn successful_searches(&self) -> Result<i64> {
    self.with_connection(|conn| {
      conn
        .query_row("SELECT COUNT(*) FROM search_history WHERE result_count > 0", [], |row| {
          row.get(0)
        })
        .context("Failed to count successful searches")
    })
  }

  /// Most recent search records, newest first
  pub fn recent_searches(&self, limit: u32) -> Result<Vec<SearchRecord>> {
    self.with_connection(|conn| {
      let mut stmt = conn
        .prepare(
          "SELECT id, user_id, keyword, category, searched_at, result_count, search_type
           FROM search_history ORDER BY searched_at DESC LIMIT ?1",
        )
        .context("Failed to prepare recent searches query")?;

      let rows =
        stmt.query_map(params![limit], record_from_row).context("Failed to query recent searches")?;

      let mut records = Vec::new();
      for record in rows {
        records.push(record?);
      }
      Ok(records)
    })
  }
}

fn preference_from_row(row: &Row<'_>) -> rusqlite::Result<UserPreference> {
  Ok(UserPreference {
    id: row.get(0)?,
    user_id: row.get(1)?,
    category: row.get(2)?,
    score: row.get(3)?,
    search_count: row.get(4)?,
    last_updated: row.get(5)?,
  })
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<SearchRecord> {
  let tag: String = row.get(6)?;
  let search_type = tag.parse::<SearchType>().map_err(|_| {
    rusqlite::Error::FromSqlConversionFailure(
      6,
      rusqlite::types::Type::Text,
      format!("unknown search type: {tag}").into(),
    )
  })?;

  Ok(SearchRecord {
    id: row.get(0)?,
    user_id: row.get(1)?,
    keyword: row.get(2)?,
    category: row.get(3)?,
    searched_at: row.get(4)?,
    result_count: row.get(5)?,
    search_type,
  })
}

fn category_counts(conn: &Connection, sql: &str, limit: u32) -> Result<Vec<CategoryCount>> {
  let mut stmt = conn.prepare(sql).context("Failed to prepare category count query")?;

  let rows = stmt
    .query_map(params![limit], |row| {
      Ok(CategoryCount { category: row.get(0)?, count: row.get(1)? })
    })
    .context("Failed to query category counts")?;

  let mut counts = Vec::new();
  for count in rows {
    counts.push(count?);
  }
  Ok(counts)
}
