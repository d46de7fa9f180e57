//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use gradient_core::error::CoreError;
use gradient_core::types::DbId;
use gradient_db::models::user::{CreateUser, SetCourse, User};
use gradient_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    input.validate()?;
    let user = UserRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = user.id, "User profile created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users/{user_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;
    Ok(Json(user))
}

/// PUT /api/v1/users/{user_id}/course
pub async fn set_course(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<SetCourse>,
) -> AppResult<Json<User>> {
    if input.course.trim().is_empty() {
        return Err(AppError::BadRequest("course must not be empty".into()));
    }

    let user = UserRepo::set_course(&state.pool, user_id, &input.course)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    tracing::info!(user_id, course = %input.course, "User course updated");
    Ok(Json(user))
}
