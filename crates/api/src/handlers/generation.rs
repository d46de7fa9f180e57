//! Handlers for the standalone content-generation endpoints.
//!
//! These mirror the frontend contract exactly: top-level paths, camelCase
//! bodies, 400 with a field-level message on missing or out-of-range
//! fields, and a 500 envelope carrying the raw completion text when the
//! AI response cannot be parsed.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use gradient_core::proficiency::validate_score;
use gradient_openai::{ProjectIdeaPayload, QuizQuestionsPayload, StudyPlanPayload};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Reject a missing body field with a field-level message.
fn require<T>(value: Option<T>, field: &'static str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("{field} is required")))
}

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizQuestionsRequest {
    pub module_name: Option<String>,
    pub proficiency_score: Option<i32>,
    pub module_description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStudyPlanRequest {
    pub module_name: Option<String>,
    pub module_description: Option<String>,
    pub proficiency: Option<i32>,
    pub weak_topics: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateProjectRequest {
    pub module_name: Option<String>,
    pub proficiency_level: Option<i32>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /generateQuizQuestions
///
/// An empty module description is allowed (a score of 0 with no
/// description still yields a Beginner-difficulty batch); a missing field
/// is not.
pub async fn quiz_questions(
    State(state): State<AppState>,
    Json(input): Json<GenerateQuizQuestionsRequest>,
) -> AppResult<Json<QuizQuestionsPayload>> {
    let module_name = require(input.module_name, "moduleName")?;
    let proficiency_score = require(input.proficiency_score, "proficiencyScore")?;
    let module_description = require(input.module_description, "moduleDescription")?;
    validate_score(proficiency_score, "proficiencyScore")?;

    let payload = state
        .gateway
        .generate_quiz_questions(&module_name, proficiency_score, &module_description)
        .await?;
    Ok(Json(payload))
}

/// POST /generateStudyPlan
pub async fn study_plan(
    State(state): State<AppState>,
    Json(input): Json<GenerateStudyPlanRequest>,
) -> AppResult<Json<StudyPlanPayload>> {
    let module_name = require(input.module_name, "moduleName")?;
    let module_description = require(input.module_description, "moduleDescription")?;
    let proficiency = require(input.proficiency, "proficiency")?;
    let weak_topics = require(input.weak_topics, "weakTopics")?;
    validate_score(proficiency, "proficiency")?;

    let payload = state
        .gateway
        .generate_study_plan(&module_name, &module_description, proficiency, &weak_topics)
        .await?;
    Ok(Json(payload))
}

/// POST /generateProject
pub async fn project(
    State(state): State<AppState>,
    Json(input): Json<GenerateProjectRequest>,
) -> AppResult<Json<ProjectIdeaPayload>> {
    let module_name = require(input.module_name, "moduleName")?;
    let proficiency_level = require(input.proficiency_level, "proficiencyLevel")?;
    validate_score(proficiency_level, "proficiencyLevel")?;

    let payload = state
        .gateway
        .generate_project_idea(&module_name, proficiency_level)
        .await?;
    Ok(Json(payload))
}
