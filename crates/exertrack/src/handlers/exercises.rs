use axum::{
    extract::rejection::{FormRejection, PathRejection},
    extract::{Path, State},
    Form, Json,
};
use uuid::Uuid;

use exertrack_core::storage::RepositoryError;
use exertrack_core::tracker::{CreateExerciseRequest, ExerciseResponse};

use crate::{handlers::AppError, state::AppState};

/// Append an exercise to a user's log (POST /api/users/{_id}/exercises).
///
/// The user is looked up first so a bad id fails with 404 before the form is
/// validated against it.
pub async fn add_exercise(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    form: Result<Form<CreateExerciseRequest>, FormRejection>,
) -> Result<Json<ExerciseResponse>, AppError> {
    let Path(user_id) = path?;
    let Form(payload) = form?;

    let user = state
        .user_repo
        .get_user(user_id)
        .await?
        .ok_or_else(|| RepositoryError::user_not_found(user_id))?;

    let exercise = payload.into_exercise(chrono::Local::now().date_naive())?;

    state.exercise_repo.add_exercise(user.id, &exercise).await?;

    tracing::info!(
        user_id = %user.id,
        duration = exercise.duration,
        date = %exercise.date,
        "Exercise added"
    );

    Ok(Json(ExerciseResponse::new(&user, &exercise)))
}
