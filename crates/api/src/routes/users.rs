//! Route definitions for users and their modules.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{modules, quiz, users};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST   /                                          -> users::create
/// GET    /{user_id}                                 -> users::get_by_id
/// PUT    /{user_id}/course                          -> users::set_course
/// GET    /{user_id}/modules                         -> modules::list
/// POST   /{user_id}/modules                         -> modules::create
/// GET    /{user_id}/modules/{module_id}             -> modules::get_by_id
/// DELETE /{user_id}/modules/{module_id}             -> modules::delete
/// PUT    /{user_id}/modules/{module_id}/description -> modules::save_description
/// PUT    /{user_id}/modules/{module_id}/study-plan/tasks/{task_index}
///                                                   -> modules::set_task_completed
/// POST   /{user_id}/modules/{module_id}/quiz/start  -> quiz::start
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create))
        .route("/{user_id}", get(users::get_by_id))
        .route("/{user_id}/course", put(users::set_course))
        .route(
            "/{user_id}/modules",
            get(modules::list).post(modules::create),
        )
        .route(
            "/{user_id}/modules/{module_id}",
            get(modules::get_by_id).delete(modules::delete),
        )
        .route(
            "/{user_id}/modules/{module_id}/description",
            put(modules::save_description),
        )
        .route(
            "/{user_id}/modules/{module_id}/study-plan/tasks/{task_index}",
            put(modules::set_task_completed),
        )
        .route("/{user_id}/modules/{module_id}/quiz/start", post(quiz::start))
}
