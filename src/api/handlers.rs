//! API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::types::Catalog;
use crate::Error;

/// Health check with system status
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        activities: state.registry.activity_count().await,
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub activities: usize,
}

/// List all activities with their current rosters
pub async fn list_activities(State(state): State<AppState>) -> Json<Catalog> {
    Json(state.registry.list().await)
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Sign a student up for an activity
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.registry.signup(&name, &params.email).await?;

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", params.email, name),
    }))
}

/// Remove a student from an activity's roster
pub async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.registry.unregister(&name, &params.email).await?;

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", params.email, name),
    }))
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// HTTP-facing error: domain error plus the status code it maps to.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match err {
            Error::ActivityNotFound(_) => StatusCode::NOT_FOUND,
            Error::AlreadySignedUp { .. }
            | Error::ActivityFull { .. }
            | Error::NotRegistered { .. } => StatusCode::BAD_REQUEST,
        };

        Self {
            status,
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "detail": self.detail,
        }));
        (self.status, body).into_response()
    }
}
