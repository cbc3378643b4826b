//! Events repository

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ToSql};

use super::Store;
use crate::models::Event;

const EVENT_COLUMNS: &str = "id, title, date, category, description";

impl Store {
  /// Persist a new event
  pub fn insert_event(&self, event: &Event) -> Result<()> {
    self.with_connection(|conn| insert_event_impl(conn, event))
  }

  /// All events, soonest first
  pub fn all_events(&self) -> Result<Vec<Event>> {
    self.with_connection(|conn| {
      query_events(conn, &format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY date ASC"), &[])
    })
  }

  /// Distinct event categories, sorted
  pub fn event_categories(&self) -> Result<Vec<String>> {
    self.with_connection(|conn| {
      let mut stmt = conn
        .prepare("SELECT DISTINCT category FROM events ORDER BY category ASC")
        .context("Failed to prepare categories query")?;
      let rows = stmt.query_map([], |row| row.get(0)).context("Failed to query categories")?;

      let mut categories = Vec::new();
      for category in rows {
        categories.push(category?);
      }
      Ok(categories)
    })
  }

  /// Filtered event search: case-insensitive keyword substring over
  /// title/description, case-insensitive category equality, inclusive date
  /// bounds. Ordered soonest first.
  pub fn search_events(
    &self,
    keyword: Option<&str>,
    category: Option<&str>,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
  ) -> Result<Vec<Event>> {
    self.with_connection(|conn| {
      let mut sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE 1=1");
      let mut values: Vec<Box<dyn ToSql>> = Vec::new();

      if let Some(keyword) = keyword {
        values.push(Box::new(format!("%{}%", keyword.to_lowercase())));
        let idx = values.len();
        sql.push_str(&format!(
          " AND (LOWER(title) LIKE ?{idx} OR LOWER(description) LIKE ?{idx})"
        ));
      }
      if let Some(category) = category {
        values.push(Box::new(category.to_lowercase()));
        sql.push_str(&format!(" AND LOWER(category) = ?{}", values.len()));
      }
      if let Some(start) = start_date {
        values.push(Box::new(start));
        sql.push_str(&format!(" AND date >= ?{}", values.len()));
      }
      if let Some(end) = end_date {
        values.push(Box::new(end));
        sql.push_str(&format!(" AND date <= ?{}", values.len()));
      }

      sql.push_str(" ORDER BY date ASC");

      let refs: Vec<&dyn ToSql> = values.iter().map(|v| v.as_ref()).collect();
      query_events(conn, &sql, &refs)
    })
  }

  /// Upcoming events in a category, soonest first, capped at `limit`
  pub fn upcoming_events_in_category(
    &self,
    category: &str,
    now: DateTime<Utc>,
    limit: u32,
  ) -> Result<Vec<Event>> {
    self.with_connection(|conn| {
      let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events
         WHERE LOWER(category) = ?1 AND date >= ?2
         ORDER BY date ASC LIMIT ?3"
      );
      query_events(conn, &sql, &[&category.to_lowercase(), &now, &limit])
    })
  }

  /// Upcoming events in any category, soonest first, capped at `limit`
  pub fn upcoming_events(&self, now: DateTime<Utc>, limit: u32) -> Result<Vec<Event>> {
    self.with_connection(|conn| {
      let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events WHERE date >= ?1 ORDER BY date ASC LIMIT ?2"
      );
      query_events(conn, &sql, &[&now, &limit])
    })
  }

  pub fn count_events(&self) -> Result<i64> {
    self.with_connection(|conn| {
      conn
        .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))
        .context("Failed to count events")
    })
  }
}

fn insert_event_impl(conn: &Connection, event: &Event) -> Result<()> {
  conn
    .execute(
      "INSERT INTO events (id, title, date, category, description) VALUES (?1, ?2, ?3, ?4, ?5)",
      params![event.id, event.title, event.date, event.category, event.description],
    )
    .context("Failed to insert event")?;

  Ok(())
}

fn query_events(conn: &Connection, sql: &str, params: &[&dyn ToSql]) -> Result<Vec<Event>> {
  let mut stmt = conn.prepare(sql).context("Failed to prepare events query")?;

  let rows = stmt
    .query_map(params, |row| {
      Ok(Event {
        id: row.get(0)?,
        title: row.get(1)?,
        date: row.get(2)?,
        category: row.get(3)?,
        description: row.get(4)?,
      })
    })
    .context("Failed to query events")?;

  let mut events = Vec::new();
  for event in rows {
    events.push(event?);
  }
  Ok(events)
}
