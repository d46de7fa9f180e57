//! Prompt builders for the three content-generation operations.
//!
//! Each prompt pins the exact JSON shape the gateway parses, since the
//! completion endpoint returns free text. Difficulty wording is derived
//! from the proficiency model so prompts and scoring agree on band names.

use gradient_core::proficiency::ProficiencyLevel;
use gradient_core::quiz::QUIZ_BATCH_SIZE;

/// Proficiency at or above which a project idea is pitched as Advanced.
pub const PROJECT_ADVANCED_THRESHOLD: i32 = 80;
/// Proficiency at or above which a project idea is pitched as Intermediate.
pub const PROJECT_INTERMEDIATE_THRESHOLD: i32 = 50;

/// Difficulty label for a generated project idea.
///
/// Coarser than the five quiz bands: >= 80 Advanced, >= 50 Intermediate,
/// else Beginner.
pub fn project_difficulty(proficiency: i32) -> &'static str {
    if proficiency >= PROJECT_ADVANCED_THRESHOLD {
        "Advanced"
    } else if proficiency >= PROJECT_INTERMEDIATE_THRESHOLD {
        "Intermediate"
    } else {
        "Beginner"
    }
}

/// Prompt requesting a batch of multiple-choice quiz questions.
pub fn quiz_questions_prompt(
    module_name: &str,
    proficiency_score: i32,
    module_description: &str,
) -> String {
    let level = ProficiencyLevel::for_score(proficiency_score).label();
    format!(
        r#"You are a quiz generation AI. Create {QUIZ_BATCH_SIZE} multiple-choice questions for the module "{module_name}".

User's Proficiency Level: {level}
Module Description: {module_description}

Response Format (JSON STRICT):
{{
  "questions": [
    {{
      "question": "Example Question?",
      "answers": {{
        "A": "Example Answer A",
        "B": "Example Answer B",
        "C": "Example Answer C",
        "D": "Example Answer D"
      }},
      "correctAnswer": "C",
      "topic": "Example Sub Topic"
    }}
  ]
}}

Rules:
- Ensure each question has exactly 4 answer choices (A, B, C, D).
- Provide the correct answer as a single letter.
- Assign a subtopic to every question and cover varied subtopics.
- Adjust difficulty to match {level}.
- Questions must be relevant to the module.
- Respond with JSON only, no surrounding text."#
    )
}

/// Prompt requesting a study plan targeted at the given weak topics.
pub fn study_plan_prompt(
    module_name: &str,
    module_description: &str,
    proficiency: i32,
    weak_topics: &[String],
) -> String {
    let level = ProficiencyLevel::for_score(proficiency).label();
    let weak = if weak_topics.is_empty() {
        "none identified; cover the module broadly".to_string()
    } else {
        weak_topics.join(", ")
    };
    format!(
        r#"You are a study planning AI. Create a study plan for the module "{module_name}".

User's Proficiency Level: {level}
Module Description: {module_description}
Weak Topics: {weak}

Response Format (JSON STRICT):
{{
  "studyTasks": [
    "Example study task"
  ],
  "exercise": "Example practical exercise"
}}

Rules:
- Provide 3 to 4 study tasks focused on the weak topics.
- Provide exactly one practical exercise.
- Keep each task short and actionable.
- Respond with JSON only, no surrounding text."#
    )
}

/// Prompt requesting a single project idea at banded difficulty.
pub fn project_idea_prompt(module_name: &str, proficiency_level: i32) -> String {
    let difficulty = project_difficulty(proficiency_level);
    format!(
        r#"You are a project suggestion AI. Suggest one practical project for the module "{module_name}".

Target Difficulty: {difficulty}

Response Format (JSON STRICT):
{{
  "description": "Example project description"
}}

Rules:
- The project must match the target difficulty.
- Describe the project in a short paragraph.
- Respond with JSON only, no surrounding text."#
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- project difficulty banding --

    #[test]
    fn project_difficulty_bands() {
        assert_eq!(project_difficulty(0), "Beginner");
        assert_eq!(project_difficulty(49), "Beginner");
        assert_eq!(project_difficulty(50), "Intermediate");
        assert_eq!(project_difficulty(79), "Intermediate");
        assert_eq!(project_difficulty(80), "Advanced");
        assert_eq!(project_difficulty(100), "Advanced");
    }

    // -- quiz prompt --

    #[test]
    fn quiz_prompt_requests_ten_questions() {
        let prompt = quiz_questions_prompt("Rust", 40, "ownership and borrowing");
        assert!(prompt.contains("10 multiple-choice questions"));
        assert!(prompt.contains("\"Rust\""));
        assert!(prompt.contains("ownership and borrowing"));
    }

    #[test]
    fn quiz_prompt_difficulty_follows_the_level_bands() {
        assert!(quiz_questions_prompt("Rust", 0, "d").contains("Beginner"));
        assert!(quiz_questions_prompt("Rust", 60, "d").contains("Advanced"));
        assert!(quiz_questions_prompt("Rust", 95, "d").contains("Expert"));
    }

    #[test]
    fn quiz_prompt_with_empty_description_is_still_a_beginner_request() {
        let prompt = quiz_questions_prompt("Rust", 0, "");
        assert!(prompt.contains("10 multiple-choice questions"));
        assert!(prompt.contains("Beginner"));
    }

    // -- study plan prompt --

    #[test]
    fn study_plan_prompt_names_the_weak_topics() {
        let weak = vec!["Lifetimes".to_string(), "Traits".to_string()];
        let prompt = study_plan_prompt("Rust", "systems programming", 30, &weak);
        assert!(prompt.contains("Lifetimes, Traits"));
        assert!(prompt.contains("3 to 4 study tasks"));
        assert!(prompt.contains("exactly one practical exercise"));
    }

    #[test]
    fn study_plan_prompt_handles_no_weak_topics() {
        let prompt = study_plan_prompt("Rust", "systems programming", 30, &[]);
        assert!(prompt.contains("cover the module broadly"));
    }

    // -- project prompt --

    #[test]
    fn project_prompt_names_the_difficulty() {
        assert!(project_idea_prompt("Rust", 85).contains("Advanced"));
        assert!(project_idea_prompt("Rust", 10).contains("Beginner"));
    }
}
