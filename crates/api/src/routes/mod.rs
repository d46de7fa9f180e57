//! Route definitions.

pub mod generation;
pub mod health;
pub mod quiz;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                            create
/// /users/{user_id}                                  get
/// /users/{user_id}/course                           set course (PUT)
///
/// /users/{user_id}/modules                          list, add
/// /users/{user_id}/modules/{id}                     get, delete (typed confirmation)
/// /users/{user_id}/modules/{id}/description         save (PUT)
/// /users/{user_id}/modules/{id}/study-plan/tasks/{index}  toggle task (PUT)
/// /users/{user_id}/modules/{id}/quiz/start          start quiz session (POST)
///
/// /quiz/{session_id}/answers                        submit answer (POST)
/// ```
///
/// The content-generation endpoints (`/generateQuizQuestions`,
/// `/generateStudyPlan`, `/generateProject`) are mounted at the root, not
/// under `/api/v1`, matching the frontend contract; see
/// [`generation::router`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/quiz", quiz::router())
}
