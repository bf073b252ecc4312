use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use exertrack_core::storage::RepositoryError;
use exertrack_core::tracker::{LogQuery, LogResponse};

use crate::{handlers::AppError, state::AppState};

/// Fetch a user's exercise log (GET /api/users/{_id}/logs).
///
/// `from`, `to` and `limit` that fail to parse are ignored rather than
/// rejected.
pub async fn get_log(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    query: Result<Query<LogQuery>, QueryRejection>,
) -> Result<Json<LogResponse>, AppError> {
    let Path(user_id) = path?;
    let Query(query) = query?;

    let log = state
        .exercise_repo
        .get_log(user_id, &query)
        .await?
        .ok_or_else(|| RepositoryError::user_not_found(user_id))?;

    tracing::debug!(%user_id, count = log.count(), ?query, "Log fetched");

    Ok(Json(LogResponse::new(&log, &query)))
}
