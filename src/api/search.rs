//! Search API endpoints.

use axum::{
    extract::{Query, State},
    Json,
};

use super::ApiResult;
use crate::models::Developer;
use crate::search::DeveloperQuery;
use crate::AppState;

/// GET /developers/search - Filter developers by keyword and role.
pub async fn search_developers(
    State(state): State<AppState>,
    Query(query): Query<DeveloperQuery>,
) -> ApiResult<Json<Vec<Developer>>> {
    Ok(Json(state.service.search(&query).await?))
}
