//! Handlers for the `/users/{user_id}/modules` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use gradient_core::error::CoreError;
use gradient_core::modules::delete_confirmation_matches;
use gradient_core::types::DbId;
use gradient_db::models::module::{
    AddModule, DeleteModule, SaveDescription, SetTaskCompleted, StudyModule,
};
use gradient_db::repositories::ModuleRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn module_not_found(module_id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Module",
        id: module_id,
    })
}

/// POST /api/v1/users/{user_id}/modules
pub async fn create(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<AddModule>,
) -> AppResult<(StatusCode, Json<StudyModule>)> {
    input.validate()?;
    let module = ModuleRepo::create(&state.pool, user_id, &input).await?;

    tracing::info!(user_id, module_id = module.id, name = %module.name, "Module added");
    Ok((StatusCode::CREATED, Json(module)))
}

/// GET /api/v1/users/{user_id}/modules
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<StudyModule>>> {
    let modules = ModuleRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(modules))
}

/// GET /api/v1/users/{user_id}/modules/{module_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((user_id, module_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<StudyModule>> {
    let module = ModuleRepo::find_by_id(&state.pool, user_id, module_id)
        .await?
        .ok_or_else(|| module_not_found(module_id))?;
    Ok(Json(module))
}

/// PUT /api/v1/users/{user_id}/modules/{module_id}/description
pub async fn save_description(
    State(state): State<AppState>,
    Path((user_id, module_id)): Path<(DbId, DbId)>,
    Json(input): Json<SaveDescription>,
) -> AppResult<Json<StudyModule>> {
    if input.description.trim().is_empty() {
        return Err(AppError::BadRequest(
            "description must not be empty".into(),
        ));
    }

    let module = ModuleRepo::save_description(&state.pool, user_id, module_id, &input.description)
        .await?
        .ok_or_else(|| module_not_found(module_id))?;
    Ok(Json(module))
}

/// DELETE /api/v1/users/{user_id}/modules/{module_id}
///
/// Destructive, so the request must carry the module name typed back
/// exactly; anything else is rejected without deleting.
pub async fn delete(
    State(state): State<AppState>,
    Path((user_id, module_id)): Path<(DbId, DbId)>,
    Json(input): Json<DeleteModule>,
) -> AppResult<StatusCode> {
    let module = ModuleRepo::find_by_id(&state.pool, user_id, module_id)
        .await?
        .ok_or_else(|| module_not_found(module_id))?;

    if !delete_confirmation_matches(&module.name, &input.confirm_name) {
        return Err(AppError::BadRequest(
            "confirmName does not match the module name".into(),
        ));
    }

    ModuleRepo::delete(&state.pool, user_id, module_id).await?;

    tracing::info!(user_id, module_id, name = %module.name, "Module deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/users/{user_id}/modules/{module_id}/study-plan/tasks/{task_index}
///
/// Toggle one study-task checkbox. Reads the stored plan, flips the task,
/// and writes the plan back; concurrent toggles are last-writer-wins.
pub async fn set_task_completed(
    State(state): State<AppState>,
    Path((user_id, module_id, task_index)): Path<(DbId, DbId, usize)>,
    Json(input): Json<SetTaskCompleted>,
) -> AppResult<Json<StudyModule>> {
    let module = ModuleRepo::find_by_id(&state.pool, user_id, module_id)
        .await?
        .ok_or_else(|| module_not_found(module_id))?;

    let mut plan = module
        .plan()
        .cloned()
        .ok_or_else(|| AppError::BadRequest("module has no study plan yet".into()))?;
    plan.set_task_completed(task_index, input.completed)?;

    let module = ModuleRepo::save_study_plan(&state.pool, user_id, module_id, &plan)
        .await?
        .ok_or_else(|| module_not_found(module_id))?;
    Ok(Json(module))
}
