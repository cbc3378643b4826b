//! REST API for the municipal services application
//!
//! Provides HTTP endpoints for issue reporting, event search, personalized
//! recommendations, and analytics. Uses axum for routing and schemars for
//! OpenAPI documentation generation.

pub mod handlers;
pub mod routing;
pub mod startup;
pub mod types;

use crate::store::Store;

/// Shared state handed to every handler
pub struct AppState {
  pub store: Store,
}
