//! Health check endpoints.
//!
//! - `/livez` - Liveness check (immediate 200, no checks)
//! - `/readyz` - Readiness check (storage round trip)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::state::AppState;

/// GET /livez - Liveness check.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness check.
///
/// Returns 200 when the storage backend answers a query, 503 otherwise.
pub async fn readyz(State(state): State<AppState>) -> Response {
    match state.user_repo.list_users().await {
        Ok(_) => (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable", "error": e.to_string() })),
            )
                .into_response()
        }
    }
}
