//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic. Body and path extraction failures are collected
//! as `Result`s so rejections map onto the shared error body.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{HealthResponse, MessageDto};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the storage
/// backend is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Message CRUD
// =============================================================================

/// POST /api/messages
///
/// Create a new message. Returns the stored representation with its
/// assigned id.
pub async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<MessageDto>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    let Json(representation) = payload?;
    let created = state.service.create(representation).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/messages/{id}
///
/// Update an existing message.
pub async fn update_message(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<MessageDto>, JsonRejection>,
) -> HandlerResult<MessageDto> {
    let Path(id) = path?;
    let Json(representation) = payload?;
    let updated = state.service.update(id, representation).await?;
    Ok(Json(updated))
}

/// GET /api/messages/{id}
///
/// Retrieve a single message by id.
pub async fn get_message(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> HandlerResult<MessageDto> {
    let Path(id) = path?;
    let message = state.service.find_by_id(id).await?;
    Ok(Json(message))
}

/// GET /api/messages
///
/// Retrieve all messages in storage order.
pub async fn list_messages(State(state): State<AppState>) -> HandlerResult<Vec<MessageDto>> {
    let messages = state.service.find_all().await?;
    Ok(Json(messages))
}

/// DELETE /api/messages/{id}
///
/// Delete a single message by id.
pub async fn delete_message(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = path?;
    state.service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
