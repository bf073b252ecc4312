use axum::{
    extract::rejection::{FormRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use exertrack_core::storage::{
    repository_error_to_status_code, validation_error_to_status_code, RepositoryError,
};
use exertrack_core::tracker::ValidationError;

/// Handler error that renders as `{"error": message}` with a matching status.
///
/// Wraps `anyhow::Error` so handlers can use `?` on repository calls,
/// validation and extractor rejections alike.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        let code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            repository_error_to_status_code(repo_error)
        } else if let Some(validation_error) = self.0.downcast_ref::<ValidationError>() {
            validation_error_to_status_code(validation_error)
        } else if let Some(rejection) = self.0.downcast_ref::<FormRejection>() {
            rejection.status().as_u16()
        } else if let Some(rejection) = self.0.downcast_ref::<PathRejection>() {
            rejection.status().as_u16()
        } else if let Some(rejection) = self.0.downcast_ref::<QueryRejection>() {
            rejection.status().as_u16()
        } else {
            500
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.0.to_string();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %message, "Request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
