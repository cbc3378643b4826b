//! Endpoint handlers

pub mod events;
pub mod issues;
pub mod recommend;
pub mod status;

use axum::http::StatusCode;
use axum::response::Json as ResponseJson;
use uuid::Uuid;

use crate::server::types::{ApiError, BaseResponse, Empty};
use crate::validation::ValidationError;

/// Map a service error onto an HTTP rejection: validation failures become
/// 400s, everything else is a 500.
pub(crate) fn rejection(
  key: &str,
  error: &anyhow::Error,
  transaction_id: Uuid,
) -> (StatusCode, ResponseJson<BaseResponse<Empty>>) {
  let status = if error.downcast_ref::<ValidationError>().is_some() {
    StatusCode::BAD_REQUEST
  } else {
    StatusCode::INTERNAL_SERVER_ERROR
  };

  let api_error = ApiError::new(key, &format!("{error:#}"));
  (status, ResponseJson(BaseResponse::<Empty>::error(vec![api_error], transaction_id)))
}
