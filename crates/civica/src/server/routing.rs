//! Axum router configuration for all endpoints

use axum::{
  routing::{get, post},
  Router,
};
use std::sync::Arc;

use crate::server::handlers::{events, issues, recommend, status};
use crate::server::AppState;

/// Create the main application router
pub fn create_router(state: Arc<AppState>) -> Router {
  Router::new()
    // Status endpoint
    .route("/status", get(status::status))
    // Issue endpoints
    .route("/issues/add", post(issues::add_issue))
    .route("/issues/list", get(issues::list_issues))
    // Event endpoints
    .route("/events/add", post(events::add_event))
    .route("/events/list", get(events::list_events))
    .route("/events/categories", get(events::list_categories))
    .route("/events/search", post(events::search_events))
    // Recommendation and analytics endpoints
    .route("/recommendations", post(recommend::recommendations))
    .route("/analytics", get(recommend::analytics))
    .with_state(state)
}
