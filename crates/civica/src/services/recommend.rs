//! Preference scoring, recommendation selection, and search analytics
//!
//! Preference and history writes triggered by a search are best-effort: a
//! failure here is logged and swallowed so the search itself still succeeds.
//! Recommendation selection degrades to the popularity fallback the same way.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use uuid::Uuid;

use crate::models::{Event, SearchAnalytics, SearchRecord, SearchType, UserPreference};
use crate::store::Store;

/// Default number of events returned by recommendation queries
pub const DEFAULT_MAX_RECOMMENDATIONS: u32 = 3;

/// Exponential decay constant, in days: decay = exp(-days_since_update / 30)
const DECAY_WINDOW_DAYS: f64 = 30.0;
/// Decayed scores at or below this are discarded as noise
const NOISE_FLOOR: f64 = 0.1;
/// Frequency bonus per recorded search, and its cap
const FREQUENCY_BONUS_STEP: f64 = 0.1;
const FREQUENCY_BONUS_CAP: f64 = 2.0;
/// Recency adjustment for searches with / without results
const SUCCESS_BONUS: f64 = 0.5;
const EMPTY_SEARCH_PENALTY: f64 = -0.2;
/// How many ranked categories feed recommendation selection
const TOP_PREFERENCE_CATEGORIES: usize = 3;
const TOP_POPULAR_CATEGORIES: u32 = 3;
/// Analytics window sizes
const ANALYTICS_TOP_CATEGORIES: u32 = 5;
const ANALYTICS_RECENT_SEARCHES: u32 = 10;

/// Decay factor for a score last updated at `last_updated`, as of `now`
pub fn decay_factor(last_updated: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
  let days = (now - last_updated).num_milliseconds() as f64 / 86_400_000.0;
  (-days / DECAY_WINDOW_DAYS).exp()
}

fn bump_score(old_score: f64, decay: f64, search_count: i64, result_count: i64) -> f64 {
  let frequency_bonus = (search_count as f64 * FREQUENCY_BONUS_STEP).min(FREQUENCY_BONUS_CAP);
  let recency_bonus = if result_count > 0 { SUCCESS_BONUS } else { EMPTY_SEARCH_PENALTY };
  (old_score * decay) + 1.0 + frequency_bonus + recency_bonus
}

/// Record a search in the history log and update the preference row for its
/// category, if one was given. Never fails: errors are logged and swallowed
/// so the triggering search still returns its results.
pub fn record_search(
  store: &Store,
  user_id: &str,
  keyword: Option<&str>,
  category: Option<&str>,
  result_count: i64,
) {
  if let Err(e) = record_search_inner(store, user_id, keyword, category, result_count, Utc::now())
  {
    tracing::warn!(error = %e, user_id, "failed to record search for preference tracking");
  }
}

fn record_search_inner(
  store: &Store,
  user_id: &str,
  keyword: Option<&str>,
  category: Option<&str>,
  result_count: i64,
  now: DateTime<Utc>,
) -> Result<()> {
  let keyword = keyword.map(str::trim).filter(|s| !s.is_empty());
  let category = category.map(str::trim).filter(|s| !s.is_empty());

  let record = SearchRecord {
    id: Uuid::new_v4().to_string(),
    user_id: user_id.to_string(),
    keyword: keyword.map(String::from),
    category: category.map(String::from),
    searched_at: now,
    result_count,
    search_type: SearchType::classify(keyword, category),
  };

  let preference = match category {
    Some(category) => Some(next_preference(store, user_id, category, result_count, now)?),
    None => None,
  };

  store.record_search(&record, preference.as_ref())
}

/// Compute the preference row that a search against `category` should leave
/// behind: a fresh row on first contact, otherwise the decayed-and-bumped
/// revision of the existing one.
fn next_preference(
  store: &Store,
  user_id: &str,
  category: &str,
  result_count: i64,
  now: DateTime<Utc>,
) -> Result<UserPreference> {
  match store.find_preference(user_id, category)? {
    None => Ok(UserPreference {
      id: Uuid::new_v4().to_string(),
      user_id: user_id.to_string(),
      category: category.to_lowercase(),
      score: 1.0,
      search_count: 1,
      last_updated: now,
    }),
    Some(existing) => {
      let decay = decay_factor(existing.last_updated, now);
      Ok(UserPreference {
        score: bump_score(existing.score, decay, existing.search_count, result_count),
        search_count: existing.search_count + 1,
        last_updated: now,
        ..existing
      })
    }
  }
}

/// Personalized event recommendations for a user, at most `max` entries.
/// Never fails: any error degrades to the popularity fallback.
pub fn personalized_recommendations(store: &Store, user_id: &str, max: u32) -> Vec<Event> {
  match personalized_inner(store, user_id, max, Utc::now()) {
    Ok(events) => events,
    Err(e) => {
      tracing::warn!(error = %e, user_id, "recommendation selection failed, using popular events");
      popular_events(store, max).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "popular-events fallback failed");
        Vec::new()
      })
    }
  }
}

fn personalized_inner(
  store: &Store,
  user_id: &str,
  max: u32,
  now: DateTime<Utc>,
) -> Result<Vec<Event>> {
  // Decay every score in memory to reflect elapsed time; the stored values
  // are left untouched.
  let mut preferences: Vec<UserPreference> = store
    .preferences_for_user(user_id)?
    .into_iter()
    .map(|mut pref| {
      pref.score *= decay_factor(pref.last_updated, now);
      pref
    })
    .filter(|pref| pref.score > NOISE_FLOOR)
    .collect();

  if preferences.is_empty() {
    return popular_events_at(store, max, now);
  }

  preferences.sort_by(|a, b| {
    b.score
      .partial_cmp(&a.score)
      .unwrap_or(Ordering::Equal)
      .then_with(|| b.search_count.cmp(&a.search_count))
  });

  let mut recommendations = Vec::new();
  for preference in preferences.iter().take(TOP_PREFERENCE_CATEGORIES) {
    recommendations.extend(store.upcoming_events_in_category(&preference.category, now, max)?);

    if recommendations.len() >= max as usize {
      break;
    }
  }

  if recommendations.len() < max as usize {
    let shortfall = max - recommendations.len() as u32;
    recommendations.extend(popular_events_at(store, shortfall, now)?);
  }

  recommendations.truncate(max as usize);
  Ok(recommendations)
}

/// Popularity fallback: up to `count` upcoming events drawn from the most
/// frequently and successfully searched categories platform-wide, topped up
/// with any upcoming events when those categories run dry.
pub fn popular_events(store: &Store, count: u32) -> Result<Vec<Event>> {
  popular_events_at(store, count, Utc::now())
}

fn popular_events_at(store: &Store, count: u32, now: DateTime<Utc>) -> Result<Vec<Event>> {
  let mut events = Vec::new();

  for ranked in store.popular_categories(TOP_POPULAR_CATEGORIES)? {
    events.extend(store.upcoming_events_in_category(&ranked.category, now, count)?);
  }

  if events.len() < count as usize {
    let shortfall = count - events.len() as u32;
    events.extend(store.upcoming_events(now, shortfall)?);
  }

  events.truncate(count as usize);
  Ok(events)
}

/// Aggregate the search log: totals, success rate, top categories, and the
/// most recent searches. Pure read, no side effects.
pub fn search_analytics(store: &Store) -> Result<SearchAnalytics> {
  let total_searches = store.total_searches()?;
  let successful_searches = store.successful_searches()?;

  let success_rate = if total_searches > 0 {
    successful_searches as f64 / total_searches as f64 * 100.0
  } else {
    0.0
  };

  Ok(SearchAnalytics {
    total_searches,
    successful_searches,
    success_rate,
    top_categories: store.top_search_categories(ANALYTICS_TOP_CATEGORIES)?,
    recent_searches: store.recent_searches(ANALYTICS_RECENT_SEARCHES)?,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Duration;

  #[test]
  fn decay_is_one_with_no_elapsed_time() {
    let now = Utc::now();
    assert!((decay_factor(now, now) - 1.0).abs() < 1e-9);
  }

  #[test]
  fn decay_after_thirty_days_is_e_inverse() {
    let now = Utc::now();
    let factor = decay_factor(now - Duration::days(30), now);
    assert!((factor - (-1.0f64).exp()).abs() < 1e-6);
  }

  #[test]
  fn decay_never_goes_negative() {
    let now = Utc::now();
    let factor = decay_factor(now - Duration::days(3650), now);
    assert!(factor > 0.0 && factor < 1e-6);
  }

  #[test]
  fn second_successful_search_scores_two_point_six() {
    // 1.0 * 1 + 1.0 + min(1 * 0.1, 2.0) + 0.5
    assert!((bump_score(1.0, 1.0, 1, 5) - 2.6).abs() < 1e-9);
  }

  #[test]
  fn second_empty_search_scores_one_point_nine() {
    // 1.0 * 1 + 1.0 + min(1 * 0.1, 2.0) - 0.2
    assert!((bump_score(1.0, 1.0, 1, 0) - 1.9).abs() < 1e-9);
  }

  #[test]
  fn frequency_bonus_caps_at_two() {
    let uncapped = bump_score(0.0, 1.0, 200, 1);
    let capped = bump_score(0.0, 1.0, 20, 1);
    assert!((uncapped - capped).abs() < 1e-9);
    assert!((capped - (1.0 + 2.0 + 0.5)).abs() < 1e-9);
  }
}
