//! HTTP request handlers

use crate::api::models::{HealthResponse, MessageResponse};
use crate::error::AppError;
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;
use std::sync::Arc;
use tracing::info;

/// Register a customer.
///
/// The body is optional and unused: it is parsed only when the request
/// declares a JSON content type, so a syntactically broken payload is
/// rejected before it reaches a future registration pipeline. No fields
/// are validated or stored yet.
#[utoipa::path(
    post,
    path = "/add_customer",
    responses(
        (status = 200, description = "Customer accepted", body = MessageResponse),
        (status = 400, description = "Malformed JSON body"),
    ),
    tag = "Customers"
)]
pub async fn add_customer(
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MessageResponse>, AppError> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_start().starts_with("application/json"))
        .unwrap_or(false);

    if is_json && !body.is_empty() {
        serde_json::from_slice::<serde_json::Value>(&body)
            .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {}", e)))?;
    }

    info!(body_bytes = body.len(), "Received customer registration request");

    Ok(Json(MessageResponse {
        message: "Customer added successfully".to_string(),
    }))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}
