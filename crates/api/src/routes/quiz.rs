//! Route definitions for active quiz sessions.

use axum::routing::post;
use axum::Router;

use crate::handlers::quiz;
use crate::state::AppState;

/// Routes mounted at `/quiz`.
///
/// ```text
/// POST /{session_id}/answers -> submit_answer
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{session_id}/answers", post(quiz::submit_answer))
}
