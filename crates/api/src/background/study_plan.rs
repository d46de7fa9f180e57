//! Best-effort study-plan refresh after a completed quiz.
//!
//! Decoupled from the quiz-results path: the user sees their results
//! whether or not this succeeds. Every failure mode here is logged and
//! swallowed; a module deleted while the refresh was in flight simply
//! discards the late result.

use tokio::task::JoinHandle;

use gradient_core::study_plan::StudyPlan;
use gradient_db::models::module::StudyModule;
use gradient_db::repositories::ModuleRepo;

use crate::state::AppState;

/// Spawn a refresh of `module`'s study plan targeting `weak_topics`.
///
/// Returns the task handle; callers may await it (tests do) or drop it,
/// in which case the tracker still awaits the task at shutdown.
pub fn spawn_refresh(
    state: &AppState,
    module: &StudyModule,
    weak_topics: Vec<String>,
) -> JoinHandle<()> {
    let gateway = state.gateway.clone();
    let pool = state.pool.clone();
    let user_id = module.user_id;
    let module_id = module.id;
    let name = module.name.clone();
    let description = module.description.clone();
    let proficiency = module.proficiency;

    state.background.spawn(async move {
        let payload = match gateway
            .generate_study_plan(&name, &description, proficiency, &weak_topics)
            .await
        {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(user_id, module_id, error = %err, "Study plan refresh failed");
                return;
            }
        };

        let plan = StudyPlan::from_generated(payload.study_tasks, payload.exercise);
        match ModuleRepo::save_study_plan(&pool, user_id, module_id, &plan).await {
            Ok(Some(_)) => {
                tracing::info!(user_id, module_id, "Study plan refreshed");
            }
            Ok(None) => {
                tracing::warn!(
                    user_id,
                    module_id,
                    "Module disappeared before the refreshed study plan could be saved"
                );
            }
            Err(err) => {
                tracing::warn!(user_id, module_id, error = %err, "Failed to save refreshed study plan");
            }
        }
    })
}
