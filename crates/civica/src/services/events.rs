//! Event management: creation, listing, and filtered search
//!
//! Every search invocation, regardless of result count, feeds the
//! recommendation engine's preference tracking.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Event;
use crate::services::recommend;
use crate::store::Store;
use crate::validation::require_fields;

/// Caller-supplied input for a new event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
  pub title: String,
  pub date: DateTime<Utc>,
  pub category: String,
  pub description: String,
}

/// Search filter; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventFilter {
  pub keyword: Option<String>,
  pub category: Option<String>,
  pub start_date: Option<DateTime<Utc>>,
  pub end_date: Option<DateTime<Utc>>,
}

impl EventFilter {
  fn keyword(&self) -> Option<&str> {
    self.keyword.as_deref().map(str::trim).filter(|s| !s.is_empty())
  }

  fn category(&self) -> Option<&str> {
    self.category.as_deref().map(str::trim).filter(|s| !s.is_empty())
  }
}

/// Validate and persist a new event
pub fn add_event(store: &Store, input: NewEvent) -> Result<Event> {
  require_fields(&[
    ("title", &input.title),
    ("category", &input.category),
    ("description", &input.description),
  ])?;

  let event = Event::new(input.title, input.date, input.category, input.description);

  store.insert_event(&event)?;
  tracing::info!(id = %event.id, category = %event.category, "event added");

  Ok(event)
}

/// All events, soonest first
pub fn all_events(store: &Store) -> Result<Vec<Event>> {
  store.all_events()
}

/// All events grouped under their calendar date, ascending
pub fn events_by_day(store: &Store) -> Result<BTreeMap<NaiveDate, Vec<Event>>> {
  let mut by_day: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
  for event in store.all_events()? {
    by_day.entry(event.date.date_naive()).or_default().push(event);
  }
  Ok(by_day)
}

/// Distinct event categories, sorted
pub fn categories(store: &Store) -> Result<Vec<String>> {
  store.event_categories()
}

/// Filtered search ordered by date ascending. Records the search for the
/// user's preference tracking; that write is best-effort and never blocks
/// the results.
pub fn search_events(store: &Store, user_id: &str, filter: &EventFilter) -> Result<Vec<Event>> {
  let results = store.search_events(
    filter.keyword(),
    filter.category(),
    filter.start_date,
    filter.end_date,
  )?;

  recommend::record_search(
    store,
    user_id,
    filter.keyword(),
    filter.category(),
    results.len() as i64,
  );

  Ok(results)
}
