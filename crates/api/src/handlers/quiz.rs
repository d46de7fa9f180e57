//! Handlers for the quiz session flow.
//!
//! `start` runs the Intro -> Active transition: gating checks, question
//! generation, batch validation, and session creation. `submit_answer`
//! advances the session one answer at a time; answering the last question
//! runs the scoring pipeline (proficiency update + topic classification),
//! persists the result, and kicks off the best-effort study-plan refresh
//! in the background. The session entry is only dropped once persistence
//! has succeeded, so a failed final write can be retried without losing
//! any recorded answers.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gradient_core::error::CoreError;
use gradient_core::modules::ensure_quiz_ready;
use gradient_core::proficiency::{raw_score_percent, update_proficiency, ProficiencyLevel};
use gradient_core::quiz::{AnswerChoice, Question, QuizSession};
use gradient_core::topics::{classify_topics, label_topics};
use gradient_core::types::DbId;
use gradient_db::models::module::QuizResultUpdate;
use gradient_db::repositories::ModuleRepo;

use crate::background;
use crate::error::{AppError, AppResult};
use crate::sessions::{ActiveQuiz, AnswerOutcome};
use crate::state::AppState;

fn module_not_found(module_id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Module",
        id: module_id,
    })
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartQuizResponse {
    pub session_id: Uuid,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: AnswerChoice,
}

/// Final results of a completed quiz attempt.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResults {
    pub correct: usize,
    pub total: usize,
    pub score_percent: i32,
    pub new_proficiency: i32,
    pub level: String,
    pub strong_topics: Vec<String>,
    pub weak_topics: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AnswerResponse {
    #[serde(rename_all = "camelCase")]
    InProgress {
        current_index: usize,
        total_questions: usize,
    },
    Completed { results: QuizResults },
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/users/{user_id}/modules/{module_id}/quiz/start
///
/// Fails without creating a session if the module is not quiz-ready or
/// the generated batch does not validate; starting is retryable.
pub async fn start(
    State(state): State<AppState>,
    Path((user_id, module_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<StartQuizResponse>> {
    let module = ModuleRepo::find_by_id(&state.pool, user_id, module_id)
        .await?
        .ok_or_else(|| module_not_found(module_id))?;

    ensure_quiz_ready(&module.description, module.has_been_tested, module.plan())?;

    let payload = state
        .gateway
        .generate_quiz_questions(&module.name, module.proficiency, &module.description)
        .await?;

    let session = QuizSession::new(payload.questions)?;
    let questions = session.questions().to_vec();
    let total_questions = session.total_questions();

    let session_id = state
        .sessions
        .insert(ActiveQuiz {
            user_id,
            module_id,
            session,
        })
        .await;

    tracing::info!(user_id, module_id, %session_id, total_questions, "Quiz session started");
    Ok(Json(StartQuizResponse {
        session_id,
        questions,
        total_questions,
    }))
}

/// POST /api/v1/quiz/{session_id}/answers
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<SubmitAnswerRequest>,
) -> AppResult<Json<AnswerResponse>> {
    let outcome = state
        .sessions
        .submit_answer(session_id, input.answer)
        .await
        .ok_or_else(|| AppError::NotFound("quiz session not found".into()))?;

    match outcome? {
        AnswerOutcome::Progress {
            current_index,
            total_questions,
        } => Ok(Json(AnswerResponse::InProgress {
            current_index,
            total_questions,
        })),
        AnswerOutcome::Completed(quiz) => {
            let results = finalize(&state, &quiz).await?;
            // Persistence succeeded; drop the session so the pipeline
            // cannot run a second time for this attempt.
            state.sessions.remove(session_id).await;
            tracing::info!(
                user_id = quiz.user_id,
                module_id = quiz.module_id,
                %session_id,
                score_percent = results.score_percent,
                "Quiz completed"
            );
            Ok(Json(AnswerResponse::Completed { results }))
        }
    }
}

// ---------------------------------------------------------------------------
// Scoring pipeline
// ---------------------------------------------------------------------------

/// Score a completed session, fold the result into the module row, and
/// spawn the study-plan refresh.
///
/// The refresh is decoupled: its outcome never affects the returned
/// results, and its failures are logged by the background task.
async fn finalize(state: &AppState, quiz: &ActiveQuiz) -> AppResult<QuizResults> {
    let score = quiz.session.score()?;
    let score_percent = raw_score_percent(score.correct, score.total)?;

    let module = ModuleRepo::find_by_id(&state.pool, quiz.user_id, quiz.module_id)
        .await?
        .ok_or_else(|| module_not_found(quiz.module_id))?;

    let new_proficiency = update_proficiency(module.proficiency, score_percent);
    let level = ProficiencyLevel::for_score(new_proficiency);
    let classification = classify_topics(quiz.session.questions(), quiz.session.answers());

    let update = QuizResultUpdate {
        new_proficiency,
        strong_delta: label_topics(&classification.strong, level),
        weak_delta: label_topics(&classification.weak, level),
    };
    let updated = ModuleRepo::apply_quiz_result(&state.pool, quiz.user_id, quiz.module_id, &update)
        .await?
        .ok_or_else(|| module_not_found(quiz.module_id))?;

    // The handle is intentionally dropped here; the tracker in AppState
    // still awaits the task at shutdown.
    let _ = background::study_plan::spawn_refresh(state, &updated, classification.weak.clone());

    Ok(QuizResults {
        correct: score.correct,
        total: score.total,
        score_percent,
        new_proficiency: updated.proficiency,
        level: ProficiencyLevel::for_score(updated.proficiency)
            .label()
            .to_string(),
        strong_topics: classification.strong,
        weak_topics: classification.weak,
    })
}
