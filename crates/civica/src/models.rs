//! Domain records persisted by the store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A resident-submitted service issue. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
  pub id: String,
  pub location: String,
  pub category: String,
  pub description: String,
  /// Attachment file name, stored as an opaque string
  pub attached_file: Option<String>,
  pub submitted_at: DateTime<Utc>,
}

impl Issue {
  pub fn new(
    location: String,
    category: String,
    description: String,
    attached_file: Option<String>,
  ) -> Self {
    Self {
      id: Uuid::new_v4().to_string(),
      location,
      category,
      description,
      attached_file,
      submitted_at: Utc::now(),
    }
  }
}

/// A community event. Read-only after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
  pub id: String,
  pub title: String,
  pub date: DateTime<Utc>,
  pub category: String,
  pub description: String,
}

impl Event {
  pub fn new(title: String, date: DateTime<Utc>, category: String, description: String) -> Self {
    Self { id: Uuid::new_v4().to_string(), title, date, category, description }
  }
}

/// Classification of a search by which optional filters were supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchType {
  General,
  Keyword,
  Category,
  KeywordAndCategory,
}

impl SearchType {
  pub fn classify(keyword: Option<&str>, category: Option<&str>) -> Self {
    match (keyword.is_some(), category.is_some()) {
      (true, true) => Self::KeywordAndCategory,
      (true, false) => Self::Keyword,
      (false, true) => Self::Category,
      (false, false) => Self::General,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::General => "General",
      Self::Keyword => "Keyword",
      Self::Category => "Category",
      Self::KeywordAndCategory => "KeywordAndCategory",
    }
  }
}

impl std::str::FromStr for SearchType {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "General" => Ok(Self::General),
      "Keyword" => Ok(Self::Keyword),
      "Category" => Ok(Self::Category),
      "KeywordAndCategory" => Ok(Self::KeywordAndCategory),
      other => Err(anyhow::anyhow!("unknown search type: {other}")),
    }
  }
}

/// One row of the append-only search log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
  pub id: String,
  pub user_id: String,
  pub keyword: Option<String>,
  pub category: Option<String>,
  pub searched_at: DateTime<Utc>,
  pub result_count: i64,
  pub search_type: SearchType,
}

/// Per-user, per-category affinity. The category is stored lowercased so a
/// differently-cased spelling can never create a second row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreference {
  pub id: String,
  pub user_id: String,
  pub category: String,
  pub score: f64,
  pub search_count: i64,
  pub last_updated: DateTime<Utc>,
}

/// Category with its platform-wide search frequency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
  pub category: String,
  pub count: i64,
}

/// Aggregated view over the search log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchAnalytics {
  pub total_searches: i64,
  pub successful_searches: i64,
  /// Percentage of searches with at least one result, 0 when the log is empty
  pub success_rate: f64,
  pub top_categories: Vec<CategoryCount>,
  pub recent_searches: Vec<SearchRecord>,
}
