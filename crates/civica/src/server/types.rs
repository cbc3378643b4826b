//! REST API types with schemars annotations for OpenAPI generation

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{CategoryCount, Event, Issue, SearchAnalytics, SearchRecord};
use crate::services::attachments::AttachmentMeta;

// Base Response Structure
// =======================

/// Base response object for all API endpoints
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BaseResponse<T> {
  /// Transaction ID for logging correlation
  pub transaction_id: Uuid,

  /// Optional error information
  #[serde(skip_serializing_if = "Vec::is_empty", default)]
  pub errors: Vec<ApiError>,

  /// Response data (generic for different endpoint types)
  #[serde(flatten)]
  pub data: T,
}

/// API error information
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ApiError {
  /// Error key, unique to the error source
  pub key: String,

  /// Human readable error message
  pub message: String,
}

/// Payload for responses that carry no data; serializes as an empty object
/// so it can be flattened into the base envelope
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct Empty {}

impl<T> BaseResponse<T> {
  /// Create a successful response
  pub fn success(data: T, transaction_id: Uuid) -> Self {
    Self { transaction_id, errors: Vec::new(), data }
  }

  /// Create an error response
  pub fn error(errors: Vec<ApiError>, transaction_id: Uuid) -> BaseResponse<Empty> {
    BaseResponse { transaction_id, errors, data: Empty {} }
  }
}

impl ApiError {
  pub fn new(key: &str, message: &str) -> Self {
    Self { key: key.to_string(), message: message.to_string() }
  }
}

// Status Endpoint
// ===============

/// Response for /status endpoint
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StatusResponse {
  pub status: String,
  /// Path of the SQLite database the server is using
  pub database: String,
  pub version: String,
}

// Issues Endpoints
// ================

/// Attachment metadata offered with an issue report; only the name is stored
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AttachmentInput {
  pub file_name: String,
  pub size_bytes: u64,
}

impl From<AttachmentInput> for AttachmentMeta {
  fn from(input: AttachmentInput) -> Self {
    Self { file_name: input.file_name, size_bytes: input.size_bytes }
  }
}

/// Request for /issues/add
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddIssueRequest {
  pub location: String,
  pub category: String,
  pub description: String,
  #[serde(default)]
  pub attachment: Option<AttachmentInput>,
}

/// Response for /issues/add
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddIssueResponse {
  pub issue: IssueSummary,
}

/// Response for /issues/list
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListIssuesResponse {
  /// Issues, newest first
  pub issues: Vec<IssueSummary>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IssueSummary {
  pub id: String,
  pub location: String,
  pub category: String,
  pub description: String,
  pub attached_file: Option<String>,
  pub submitted_at: DateTime<Utc>,
}

impl From<Issue> for IssueSummary {
  fn from(issue: Issue) -> Self {
    Self {
      id: issue.id,
      location: issue.location,
      category: issue.category,
      description: issue.description,
      attached_file: issue.attached_file,
      submitted_at: issue.submitted_at,
    }
  }
}

// Events Endpoints
// ================

/// Request for /events/add
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddEventRequest {
  pub title: String,
  pub date: DateTime<Utc>,
  pub category: String,
  pub description: String,
}

/// Response for /events/add
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddEventResponse {
  pub event: EventSummary,
}

/// Request for /events/search; every filter is optional
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchEventsRequest {
  /// User whose preferences this search should inform
  #[serde(default = "default_user")]
  pub user_id: String,
  #[serde(default)]
  pub keyword: Option<String>,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub start_date: Option<DateTime<Utc>>,
  #[serde(default)]
  pub end_date: Option<DateTime<Utc>>,
}

/// Response for /events/list and /events/search
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListEventsResponse {
  /// Events ordered by date ascending
  pub events: Vec<EventSummary>,
}

/// Response for /events/categories
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CategoriesResponse {
  pub categories: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EventSummary {
  pub id: String,
  pub title: String,
  pub date: DateTime<Utc>,
  pub category: String,
  pub description: String,
}

impl From<Event> for EventSummary {
  fn from(event: Event) -> Self {
    Self {
      id: event.id,
      title: event.title,
      date: event.date,
      category: event.category,
      description: event.description,
    }
  }
}

// Recommendations and Analytics Endpoints
// =======================================

/// Request for /recommendations
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RecommendationsRequest {
  #[serde(default = "default_user")]
  pub user_id: String,
  /// Maximum number of events to return
  #[serde(default = "default_recommendation_count")]
  pub count: u32,
}

/// Response for /recommendations
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RecommendationsResponse {
  pub events: Vec<EventSummary>,
}

/// Response for /analytics
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AnalyticsResponse {
  pub total_searches: i64,
  pub successful_searches: i64,
  /// Success percentage; 0 when no searches are recorded
  pub success_rate: f64,
  pub top_categories: Vec<CategoryCountEntry>,
  pub recent_searches: Vec<SearchRecordEntry>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CategoryCountEntry {
  pub category: String,
  pub count: i64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchRecordEntry {
  pub keyword: Option<String>,
  pub category: Option<String>,
  pub searched_at: DateTime<Utc>,
  pub result_count: i64,
  pub search_type: String,
}

impl From<CategoryCount> for CategoryCountEntry {
  fn from(count: CategoryCount) -> Self {
    Self { category: count.category, count: count.count }
  }
}

impl From<SearchRecord> for SearchRecordEntry {
  fn from(record: SearchRecord) -> Self {
    Self {
      keyword: record.keyword,
      category: record.category,
      searched_at: record.searched_at,
      result_count: record.result_count,
      search_type: record.search_type.as_str().to_string(),
    }
  }
}

impl From<SearchAnalytics> for AnalyticsResponse {
  fn from(analytics: SearchAnalytics) -> Self {
    Self {
      total_searches: analytics.total_searches,
      successful_searches: analytics.successful_searches,
      success_rate: analytics.success_rate,
      top_categories: analytics.top_categories.into_iter().map(Into::into).collect(),
      recent_searches: analytics.recent_searches.into_iter().map(Into::into).collect(),
    }
  }
}

fn default_user() -> String {
  "local".to_string()
}

fn default_recommendation_count() -> u32 {
  crate::services::recommend::DEFAULT_MAX_RECOMMENDATIONS
}
