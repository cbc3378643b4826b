//! Event endpoint handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json as ResponseJson;
use axum::Json;
use std::sync::Arc;
use uuid::Uuid;

use crate::server::handlers::rejection;
use crate::server::types::{
  AddEventRequest, AddEventResponse, BaseResponse, CategoriesResponse, Empty, ListEventsResponse,
  SearchEventsRequest,
};
use crate::server::AppState;
use crate::services::events::{self, EventFilter, NewEvent};

/// POST /events/add - Add a new event
pub async fn add_event(
  State(state): State<Arc<AppState>>,
  Json(request): Json<AddEventRequest>,
) -> Result<ResponseJson<BaseResponse<AddEventResponse>>, (StatusCode, ResponseJson<BaseResponse<Empty>>)>
{
  let transaction_id = Uuid::new_v4();

  let input = NewEvent {
    title: request.title,
    date: request.date,
    category: request.category,
    description: request.description,
  };

  match events::add_event(&state.store, input) {
    Ok(event) => {
      let response = AddEventResponse { event: event.into() };
      Ok(ResponseJson(BaseResponse::success(response, transaction_id)))
    }
    Err(e) => Err(rejection("event_add_failed", &e, transaction_id)),
  }
}

/// GET /events/list - List all events, date ascending
pub async fn list_events(
  State(state): State<Arc<AppState>>,
) -> Result<ResponseJson<BaseResponse<ListEventsResponse>>, (StatusCode, ResponseJson<BaseResponse<Empty>>)>
{
  let transaction_id = Uuid::new_v4();

  match events::all_events(&state.store) {
    Ok(all) => {
      let response = ListEventsResponse { events: all.into_iter().map(Into::into).collect() };
      Ok(ResponseJson(BaseResponse::success(response, transaction_id)))
    }
    Err(e) => Err(rejection("events_list_failed", &e, transaction_id)),
  }
}

/// GET /events/categories - Distinct event categories
pub async fn list_categories(
  State(state): State<Arc<AppState>>,
) -> Result<ResponseJson<BaseResponse<CategoriesResponse>>, (StatusCode, ResponseJson<BaseResponse<Empty>>)>
{
  let transaction_id = Uuid::new_v4();

  match events::categories(&state.store) {
    Ok(categories) => {
      Ok(ResponseJson(BaseResponse::success(CategoriesResponse { categories }, transaction_id)))
    }
    Err(e) => Err(rejection("categories_list_failed", &e, transaction_id)),
  }
}

/// POST /events/search - Filtered event search; also records the search for
/// the user's preference tracking
pub async fn search_events(
  State(state): State<Arc<AppState>>,
  Json(request): Json<SearchEventsRequest>,
) -> Result<ResponseJson<BaseResponse<ListEventsResponse>>, (StatusCode, ResponseJson<BaseResponse<Empty>>)>
{
  let transaction_id = Uuid::new_v4();

  let filter = EventFilter {
    keyword: request.keyword,
    category: request.category,
    start_date: request.start_date,
    end_date: request.end_date,
  };

  match events::search_events(&state.store, &request.user_id, &filter) {
    Ok(results) => {
      let response = ListEventsResponse { events: results.into_iter().map(Into::into).collect() };
      Ok(ResponseJson(BaseResponse::success(response, transaction_id)))
    }
    Err(e) => Err(rejection("events_search_failed", &e, transaction_id)),
  }
}
