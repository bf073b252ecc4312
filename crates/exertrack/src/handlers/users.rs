//! User handlers.

use axum::{extract::rejection::FormRejection, extract::State, Form, Json};

use exertrack_core::tracker::{CreateUserRequest, UserResponse};

use crate::{handlers::AppError, state::AppState};

/// List every user (GET /api/users).
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_repo.list_users().await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// Create a user (POST /api/users).
pub async fn create_user(
    State(state): State<AppState>,
    form: Result<Form<CreateUserRequest>, FormRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let Form(payload) = form?;
    let user = payload.validate()?;

    state.user_repo.create_user(&user).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "User created");

    Ok(Json(UserResponse::from(&user)))
}
