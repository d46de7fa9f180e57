//! Learning-module entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use gradient_core::study_plan::StudyPlan;
use gradient_core::topics::TopicMap;
use gradient_core::types::{DbId, Timestamp};

/// A row from the `modules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyModule {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub description: String,
    /// Estimated mastery, 0-100. Monotonically non-decreasing across quiz
    /// attempts.
    pub proficiency: i32,
    pub has_been_tested: bool,
    pub last_tested: Option<Timestamp>,
    /// Topic name -> level label; disjoint from `weak_topics`.
    pub strong_topics: Json<TopicMap>,
    pub weak_topics: Json<TopicMap>,
    /// NULL until the first study plan has been generated.
    pub study_plan: Option<Json<StudyPlan>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl StudyModule {
    /// The stored study plan, if any, without the sqlx wrapper.
    pub fn plan(&self) -> Option<&StudyPlan> {
        self.study_plan.as_ref().map(|p| &p.0)
    }
}

/// DTO for adding a module.
#[derive(Debug, Clone, Deserialize, validator::Validate)]
pub struct AddModule {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

/// DTO for saving a module description.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveDescription {
    pub description: String,
}

/// DTO for the typed delete confirmation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteModule {
    /// Must match the module name exactly for the delete to proceed.
    pub confirm_name: String,
}

/// DTO for toggling a study-task checkbox.
#[derive(Debug, Clone, Deserialize)]
pub struct SetTaskCompleted {
    pub completed: bool,
}

/// The outcome of a scored quiz attempt, ready to be folded into the row.
#[derive(Debug, Clone)]
pub struct QuizResultUpdate {
    /// Already weighted and clamped to never decrease by the caller.
    pub new_proficiency: i32,
    /// This attempt's strong topics, labeled with the updated level.
    pub strong_delta: TopicMap,
    /// This attempt's weak topics, labeled with the updated level.
    pub weak_delta: TopicMap,
}
