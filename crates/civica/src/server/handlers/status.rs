//! Status endpoint handler

use axum::extract::State;
use axum::response::Json;
use std::sync::Arc;
use uuid::Uuid;

use crate::server::types::{BaseResponse, StatusResponse};
use crate::server::AppState;

/// GET /status - Health check endpoint
pub async fn status(State(state): State<Arc<AppState>>) -> Json<BaseResponse<StatusResponse>> {
  let transaction_id = Uuid::new_v4();

  let response = StatusResponse {
    status: "healthy".to_string(),
    database: state.store.db_path().to_string_lossy().to_string(),
    version: env!("CARGO_PKG_VERSION").to_string(),
  };

  Json(BaseResponse::success(response, transaction_id))
}
