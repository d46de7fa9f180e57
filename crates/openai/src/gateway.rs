//! Typed content-generation operations over the completion client.
//!
//! Each operation builds its prompt, runs one completion, sanitizes the
//! returned text, and parses it into a validated payload. Parsing is
//! strict: any failure surfaces [`GatewayError::Malformed`] carrying the
//! raw completion text for diagnostics. No failure is ever converted into
//! an empty-but-successful payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use gradient_core::quiz::{validate_question_batch, Question};

use crate::client::{OpenAiClient, OpenAiError};
use crate::prompts;
use crate::sanitize::{looks_like_json_object, strip_markdown_fences};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from a content-generation operation.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The completion call itself failed (network, auth, rate limit).
    #[error("Upstream completion call failed: {0}")]
    Upstream(#[from] OpenAiError),

    /// The call succeeded but the text is not a usable payload.
    #[error("AI response malformed: {reason}")]
    Malformed {
        reason: String,
        /// Raw completion text, preserved for diagnostics.
        raw: String,
    },
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Parsed payload of a quiz-question generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestionsPayload {
    pub questions: Vec<Question>,
}

/// Parsed payload of a study-plan generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlanPayload {
    pub study_tasks: Vec<String>,
    pub exercise: String,
}

/// Parsed payload of a project-idea generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectIdeaPayload {
    pub description: String,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

fn malformed(reason: impl Into<String>, raw: &str) -> GatewayError {
    GatewayError::Malformed {
        reason: reason.into(),
        raw: raw.to_string(),
    }
}

/// Sanitize and parse a completion into `T`.
///
/// Steps, each with its own failure: strip markdown fences and trim,
/// reject empty text, require the remainder to start with `{`, parse as
/// JSON into the target shape.
pub(crate) fn parse_payload<T: DeserializeOwned>(raw: &str) -> Result<T, GatewayError> {
    let text = strip_markdown_fences(raw);
    if text.is_empty() {
        return Err(malformed("completion text is empty", raw));
    }
    if !looks_like_json_object(&text) {
        return Err(malformed("completion text is not a JSON object", raw));
    }
    serde_json::from_str(&text).map_err(|e| malformed(format!("JSON parse failed: {e}"), raw))
}

fn validate_quiz_payload(payload: &QuizQuestionsPayload, raw: &str) -> Result<(), GatewayError> {
    validate_question_batch(&payload.questions)
        .map_err(|e| malformed(format!("question batch rejected: {e}"), raw))
}

fn validate_study_plan_payload(payload: &StudyPlanPayload, raw: &str) -> Result<(), GatewayError> {
    if payload.study_tasks.is_empty() {
        return Err(malformed("study plan has no tasks", raw));
    }
    if payload.study_tasks.iter().any(|t| t.trim().is_empty()) {
        return Err(malformed("study plan contains a blank task", raw));
    }
    if payload.exercise.trim().is_empty() {
        return Err(malformed("study plan has no exercise", raw));
    }
    Ok(())
}

fn validate_project_payload(payload: &ProjectIdeaPayload, raw: &str) -> Result<(), GatewayError> {
    if payload.description.trim().is_empty() {
        return Err(malformed("project idea has an empty description", raw));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Gateway
// ---------------------------------------------------------------------------

/// The three content-generation operations of the backend.
pub struct ContentGateway {
    client: OpenAiClient,
}

impl ContentGateway {
    pub fn new(client: OpenAiClient) -> Self {
        Self { client }
    }

    /// Generate a batch of quiz questions for a module.
    ///
    /// The prompt requests exactly ten questions at a difficulty matching
    /// the level band for `proficiency_score`; the returned batch is
    /// validated before being handed to a quiz session.
    pub async fn generate_quiz_questions(
        &self,
        module_name: &str,
        proficiency_score: i32,
        module_description: &str,
    ) -> Result<QuizQuestionsPayload, GatewayError> {
        let prompt =
            prompts::quiz_questions_prompt(module_name, proficiency_score, module_description);
        let raw = self.client.complete(&prompt).await?;
        let payload: QuizQuestionsPayload = parse_payload(&raw)?;
        validate_quiz_payload(&payload, &raw)?;

        tracing::info!(
            module = %module_name,
            questions = payload.questions.len(),
            "Generated quiz questions"
        );
        Ok(payload)
    }

    /// Generate a study plan targeting the module's weak topics.
    pub async fn generate_study_plan(
        &self,
        module_name: &str,
        module_description: &str,
        proficiency: i32,
        weak_topics: &[String],
    ) -> Result<StudyPlanPayload, GatewayError> {
        let prompt =
            prompts::study_plan_prompt(module_name, module_description, proficiency, weak_topics);
        let raw = self.client.complete(&prompt).await?;
        let payload: StudyPlanPayload = parse_payload(&raw)?;
        validate_study_plan_payload(&payload, &raw)?;

        tracing::info!(
            module = %module_name,
            tasks = payload.study_tasks.len(),
            "Generated study plan"
        );
        Ok(payload)
    }

    /// Generate a single project idea at banded difficulty.
    pub async fn generate_project_idea(
        &self,
        module_name: &str,
        proficiency_level: i32,
    ) -> Result<ProjectIdeaPayload, GatewayError> {
        let prompt = prompts::project_idea_prompt(module_name, proficiency_level);
        let raw = self.client.complete(&prompt).await?;
        let payload: ProjectIdeaPayload = parse_payload(&raw)?;
        validate_project_payload(&payload, &raw)?;

        tracing::info!(module = %module_name, "Generated project idea");
        Ok(payload)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn quiz_json(question_count: usize) -> String {
        let questions: Vec<String> = (0..question_count)
            .map(|i| {
                format!(
                    r#"{{
                        "question": "Question {i}?",
                        "answers": {{"A": "a", "B": "b", "C": "c", "D": "d"}},
                        "correctAnswer": "B",
                        "topic": "Topic {i}"
                    }}"#
                )
            })
            .collect();
        format!(r#"{{"questions": [{}]}}"#, questions.join(","))
    }

    // -- parse_payload --

    #[test]
    fn parses_clean_quiz_json() {
        let payload: QuizQuestionsPayload = parse_payload(&quiz_json(10)).unwrap();
        assert_eq!(payload.questions.len(), 10);
    }

    #[test]
    fn parses_fenced_quiz_json() {
        let fenced = format!("```json\n{}\n```", quiz_json(2));
        let payload: QuizQuestionsPayload = parse_payload(&fenced).unwrap();
        assert_eq!(payload.questions.len(), 2);
    }

    #[test]
    fn empty_completion_is_malformed() {
        let err = parse_payload::<ProjectIdeaPayload>("").unwrap_err();
        assert_matches!(err, GatewayError::Malformed { .. });
    }

    #[test]
    fn prose_completion_is_malformed_and_carries_raw_text() {
        let raw = "Sure! Here are your questions: ...";
        let err = parse_payload::<QuizQuestionsPayload>(raw).unwrap_err();
        match err {
            GatewayError::Malformed { raw: kept, .. } => assert_eq!(kept, raw),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn truncated_json_is_malformed() {
        let err = parse_payload::<QuizQuestionsPayload>(r#"{"questions": ["#).unwrap_err();
        assert_matches!(err, GatewayError::Malformed { .. });
    }

    // -- payload validation --

    #[test]
    fn quiz_batch_with_bad_letter_fails_at_parse() {
        let raw = r#"{"questions": [{
            "question": "q",
            "answers": {"A": "a", "B": "b", "C": "c", "D": "d"},
            "correctAnswer": "E",
            "topic": "t"
        }]}"#;
        assert!(parse_payload::<QuizQuestionsPayload>(raw).is_err());
    }

    #[test]
    fn quiz_batch_with_missing_answer_fails_validation() {
        let raw = r#"{"questions": [{
            "question": "q",
            "answers": {"A": "a", "B": "b", "C": "c"},
            "correctAnswer": "A",
            "topic": "t"
        }]}"#;
        let payload: QuizQuestionsPayload = parse_payload(raw).unwrap();
        assert!(validate_quiz_payload(&payload, raw).is_err());
    }

    #[test]
    fn empty_question_list_fails_validation() {
        let raw = r#"{"questions": []}"#;
        let payload: QuizQuestionsPayload = parse_payload(raw).unwrap();
        assert!(validate_quiz_payload(&payload, raw).is_err());
    }

    #[test]
    fn study_plan_payload_parses_and_validates() {
        let raw = r#"{"studyTasks": ["revise traits", "write a linked list"], "exercise": "build a CLI"}"#;
        let payload: StudyPlanPayload = parse_payload(raw).unwrap();
        assert!(validate_study_plan_payload(&payload, raw).is_ok());
        assert_eq!(payload.study_tasks.len(), 2);
    }

    #[test]
    fn study_plan_without_tasks_fails_validation() {
        let raw = r#"{"studyTasks": [], "exercise": "build a CLI"}"#;
        let payload: StudyPlanPayload = parse_payload(raw).unwrap();
        assert!(validate_study_plan_payload(&payload, raw).is_err());
    }

    #[test]
    fn study_plan_with_blank_exercise_fails_validation() {
        let raw = r#"{"studyTasks": ["revise"], "exercise": "  "}"#;
        let payload: StudyPlanPayload = parse_payload(raw).unwrap();
        assert!(validate_study_plan_payload(&payload, raw).is_err());
    }

    #[test]
    fn project_payload_requires_a_description() {
        let raw = r#"{"description": ""}"#;
        let payload: ProjectIdeaPayload = parse_payload(raw).unwrap();
        assert!(validate_project_payload(&payload, raw).is_err());

        let raw = r#"{"description": "Build a habit tracker"}"#;
        let payload: ProjectIdeaPayload = parse_payload(raw).unwrap();
        assert!(validate_project_payload(&payload, raw).is_ok());
    }
}
