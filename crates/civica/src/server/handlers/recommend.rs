//! Recommendation and analytics endpoint handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json as ResponseJson;
use axum::Json;
use std::sync::Arc;
use uuid::Uuid;

use crate::server::handlers::rejection;
use crate::server::types::{
  AnalyticsResponse, BaseResponse, Empty, RecommendationsRequest, RecommendationsResponse,
};
use crate::server::AppState;
use crate::services::recommend;

/// POST /recommendations - Personalized event recommendations.
/// Selection failures degrade to popular events inside the service, so this
/// endpoint only errors on request-level problems.
pub async fn recommendations(
  State(state): State<Arc<AppState>>,
  Json(request): Json<RecommendationsRequest>,
) -> ResponseJson<BaseResponse<RecommendationsResponse>> {
  let transaction_id = Uuid::new_v4();

  let events =
    recommend::personalized_recommendations(&state.store, &request.user_id, request.count);

  let response = RecommendationsResponse { events: events.into_iter().map(Into::into).collect() };
  ResponseJson(BaseResponse::success(response, transaction_id))
}

/// GET /analytics - Search analytics summary
pub async fn analytics(
  State(state): State<Arc<AppState>>,
) -> Result<ResponseJson<BaseResponse<AnalyticsResponse>>, (StatusCode, ResponseJson<BaseResponse<Empty>>)>
{
  let transaction_id = Uuid::new_v4();

  match recommend::search_analytics(&state.store) {
    Ok(analytics) => Ok(ResponseJson(BaseResponse::success(analytics.into(), transaction_id))),
    Err(e) => Err(rejection("analytics_failed", &e, transaction_id)),
  }
}
