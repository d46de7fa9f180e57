//! Study-plan document types.
//!
//! A plan is generated per module after a quiz attempt: a short list of
//! study tasks the user checks off, plus one practical exercise. The
//! stored JSON shape (`studyTasks` / `exercise`) is shared between the
//! database document and the wire format.

use crate::error::CoreError;

/// A single checkable task inside a study plan.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StudyTask {
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// An AI-generated study plan for one module.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub study_tasks: Vec<StudyTask>,
    pub exercise: String,
}

impl StudyPlan {
    /// Build a fresh plan from generated task descriptions; nothing is
    /// completed yet.
    pub fn from_generated(tasks: Vec<String>, exercise: String) -> Self {
        Self {
            study_tasks: tasks
                .into_iter()
                .map(|description| StudyTask {
                    description,
                    completed: false,
                })
                .collect(),
            exercise,
        }
    }

    /// True when every task has been checked off. An empty task list never
    /// counts as completed.
    pub fn all_tasks_completed(&self) -> bool {
        !self.study_tasks.is_empty() && self.study_tasks.iter().all(|t| t.completed)
    }

    /// Set the completion flag of the task at `index`.
    pub fn set_task_completed(&mut self, index: usize, completed: bool) -> Result<(), CoreError> {
        match self.study_tasks.get_mut(index) {
            Some(task) => {
                task.completed = completed;
                Ok(())
            }
            None => Err(CoreError::Validation(format!(
                "study plan has no task at index {index}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(completed: &[bool]) -> StudyPlan {
        StudyPlan {
            study_tasks: completed
                .iter()
                .enumerate()
                .map(|(i, &done)| StudyTask {
                    description: format!("task {i}"),
                    completed: done,
                })
                .collect(),
            exercise: "build something".into(),
        }
    }

    #[test]
    fn generated_plan_starts_unchecked() {
        let plan = StudyPlan::from_generated(
            vec!["read the book".into(), "do exercises".into()],
            "write a parser".into(),
        );
        assert_eq!(plan.study_tasks.len(), 2);
        assert!(plan.study_tasks.iter().all(|t| !t.completed));
        assert!(!plan.all_tasks_completed());
    }

    #[test]
    fn all_tasks_completed_requires_every_task() {
        assert!(!plan(&[true, false]).all_tasks_completed());
        assert!(plan(&[true, true]).all_tasks_completed());
    }

    #[test]
    fn empty_plan_is_never_completed() {
        assert!(!plan(&[]).all_tasks_completed());
    }

    #[test]
    fn toggling_a_task_out_of_range_fails() {
        let mut p = plan(&[false]);
        assert!(p.set_task_completed(1, true).is_err());
        assert!(p.set_task_completed(0, true).is_ok());
        assert!(p.study_tasks[0].completed);
    }

    #[test]
    fn stored_shape_uses_camel_case() {
        let json = serde_json::to_value(plan(&[false])).unwrap();
        assert!(json.get("studyTasks").is_some());
        assert!(json.get("exercise").is_some());
    }

    #[test]
    fn plan_survives_a_serialization_round_trip() {
        let original = plan(&[true, false]);
        let json = serde_json::to_string(&original).unwrap();
        let restored: StudyPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn deserializes_without_completed_flag() {
        let p: StudyPlan = serde_json::from_str(
            r#"{"studyTasks": [{"description": "read"}], "exercise": "build"}"#,
        )
        .unwrap();
        assert!(!p.study_tasks[0].completed);
    }
}
