//! Route definitions for the standalone content-generation endpoints.
//!
//! Mounted at the root rather than under `/api/v1`: these paths are part
//! of the frontend contract and are called cross-origin from the browser.

use axum::routing::post;
use axum::Router;

use crate::handlers::generation;
use crate::state::AppState;

/// Routes mounted at `/`.
///
/// ```text
/// POST /generateQuizQuestions -> quiz_questions
/// POST /generateStudyPlan     -> study_plan
/// POST /generateProject       -> project
/// ```
///
/// Preflight `OPTIONS` requests are answered by the CORS middleware; the
/// router layer rewrites their status to 204.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generateQuizQuestions", post(generation::quiz_questions))
        .route("/generateStudyPlan", post(generation::study_plan))
        .route("/generateProject", post(generation::project))
}
