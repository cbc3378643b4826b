//! Issue endpoint handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json as ResponseJson;
use axum::Json;
use std::sync::Arc;
use uuid::Uuid;

use crate::server::handlers::rejection;
use crate::server::types::{
  AddIssueRequest, AddIssueResponse, BaseResponse, Empty, ListIssuesResponse,
};
use crate::server::AppState;
use crate::services::issues::{self, NewIssue};

/// POST /issues/add - Report a new issue
pub async fn add_issue(
  State(state): State<Arc<AppState>>,
  Json(request): Json<AddIssueRequest>,
) -> Result<ResponseJson<BaseResponse<AddIssueResponse>>, (StatusCode, ResponseJson<BaseResponse<Empty>>)>
{
  let transaction_id = Uuid::new_v4();

  let input = NewIssue {
    location: request.location,
    category: request.category,
    description: request.description,
    attachment: request.attachment.map(Into::into),
  };

  match issues::report_issue(&state.store, input) {
    Ok(issue) => {
      let response = AddIssueResponse { issue: issue.into() };
      Ok(ResponseJson(BaseResponse::success(response, transaction_id)))
    }
    Err(e) => Err(rejection("issue_add_failed", &e, transaction_id)),
  }
}

/// GET /issues/list - List issues, newest first
pub async fn list_issues(
  State(state): State<Arc<AppState>>,
) -> Result<ResponseJson<BaseResponse<ListIssuesResponse>>, (StatusCode, ResponseJson<BaseResponse<Empty>>)>
{
  let transaction_id = Uuid::new_v4();

  match issues::all_issues(&state.store) {
    Ok(all) => {
      let response = ListIssuesResponse { issues: all.into_iter().map(Into::into).collect() };
      Ok(ResponseJson(BaseResponse::success(response, transaction_id)))
    }
    Err(e) => Err(rejection("issues_list_failed", &e, transaction_id)),
  }
}
