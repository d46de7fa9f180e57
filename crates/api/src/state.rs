use std::sync::Arc;

use tokio_util::task::TaskTracker;

use gradient_openai::ContentGateway;

use crate::config::ServerConfig;
use crate::sessions::SessionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gradient_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// AI content gateway (quiz questions, study plans, project ideas).
    pub gateway: Arc<ContentGateway>,
    /// In-memory store of active quiz sessions.
    pub sessions: Arc<SessionStore>,
    /// Tracker for fire-and-forget background tasks (study-plan refreshes).
    /// The server awaits it on shutdown and logs abandoned tasks.
    pub background: TaskTracker,
}
