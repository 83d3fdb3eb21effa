//! Developer API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::{json_body, ApiResult, MessageResponse};
use crate::models::{Developer, DeveloperInput};
use crate::AppState;

/// GET /developers - List all developers, newest first.
pub async fn list_developers(State(state): State<AppState>) -> ApiResult<Json<Vec<Developer>>> {
    Ok(Json(state.service.list().await?))
}

/// GET /developers/{id} - Get a single developer.
pub async fn get_developer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Developer>> {
    Ok(Json(state.service.get(&id).await?))
}

/// POST /developers - Create a new developer.
pub async fn create_developer(
    State(state): State<AppState>,
    payload: Result<Json<DeveloperInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Developer>)> {
    let input = json_body(payload)?;
    let developer = state.service.create(&input).await?;
    Ok((StatusCode::CREATED, Json(developer)))
}

/// PUT /developers/{id} - Update a developer.
pub async fn update_developer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DeveloperInput>, JsonRejection>,
) -> ApiResult<Json<Developer>> {
    let input = json_body(payload)?;
    Ok(Json(state.service.update(&id, &input).await?))
}

/// DELETE /developers/{id} - Delete a developer.
pub async fn delete_developer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Developer deleted successfully")))
}
