//! Module-level gating rules: quiz readiness and delete confirmation.

use crate::error::CoreError;
use crate::study_plan::StudyPlan;

/// Exact-match check for a destructive delete confirmation.
///
/// The typed confirmation must equal the module name character for
/// character; "Biology" does not confirm deleting "Biology 101".
pub fn delete_confirmation_matches(module_name: &str, confirmation: &str) -> bool {
    module_name == confirmation
}

/// Check whether a module is ready for a quiz attempt.
///
/// A first attempt requires a non-empty module description (the prompt is
/// seeded from it). A retake additionally requires the current study plan
/// to exist with every task checked off; a tested module whose plan
/// refresh has not landed yet stays locked until a plan exists.
pub fn ensure_quiz_ready(
    description: &str,
    has_been_tested: bool,
    study_plan: Option<&StudyPlan>,
) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation(
            "module description is required before taking a quiz".into(),
        ));
    }
    if !has_been_tested {
        return Ok(());
    }
    match study_plan {
        Some(plan) if plan.all_tasks_completed() => Ok(()),
        Some(_) => Err(CoreError::Conflict(
            "complete all study tasks before retaking the quiz".into(),
        )),
        None => Err(CoreError::Conflict(
            "no study plan yet; retry once the plan has been generated".into(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
