//! In-memory store of active quiz sessions.
//!
//! Sessions are ephemeral: created when a question batch has been fetched
//! and validated, advanced one answer at a time, and removed once results
//! have been computed and persisted. A session whose final persistence
//! write failed stays in the store marked completed, so the client can
//! retry without losing any recorded answers.

use std::collections::HashMap;

use tokio::sync::Mutex;
use uuid::Uuid;

use gradient_core::error::CoreError;
use gradient_core::quiz::{AnswerChoice, QuizSession, SubmitOutcome};
use gradient_core::types::DbId;

/// A quiz attempt in flight, bound to the user and module that started it.
#[derive(Debug, Clone)]
pub struct ActiveQuiz {
    pub user_id: DbId,
    pub module_id: DbId,
    pub session: QuizSession,
}

/// Result of recording one answer.
#[derive(Debug)]
pub enum AnswerOutcome {
    /// More questions remain; the session stays in the store.
    Progress {
        current_index: usize,
        total_questions: usize,
    },
    /// The last question was just answered, or a previous completion is
    /// being retried after a failed persistence write. The entry stays in
    /// the store until [`SessionStore::remove`] is called on success.
    Completed(ActiveQuiz),
}

/// Mutex-guarded map of active sessions keyed by UUID.
#[derive(Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<Uuid, ActiveQuiz>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly started quiz and return its session ID.
    pub async fn insert(&self, quiz: ActiveQuiz) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.lock().await.insert(id, quiz);
        id
    }

    /// Record an answer against the session with this ID.
    ///
    /// Returns `None` if no such session exists (expired, finished, or
    /// never created). An already-completed session short-circuits to
    /// [`AnswerOutcome::Completed`] without touching its answers, which
    /// makes the final submit retryable.
    pub async fn submit_answer(
        &self,
        session_id: Uuid,
        answer: AnswerChoice,
    ) -> Option<Result<AnswerOutcome, CoreError>> {
        let mut sessions = self.inner.lock().await;
        let quiz = sessions.get_mut(&session_id)?;

        if quiz.session.is_completed() {
            return Some(Ok(AnswerOutcome::Completed(quiz.clone())));
        }

        let outcome = match quiz.session.submit_answer(answer) {
            Ok(SubmitOutcome::Advanced { next_index }) => Ok(AnswerOutcome::Progress {
                current_index: next_index,
                total_questions: quiz.session.total_questions(),
            }),
            Ok(SubmitOutcome::Completed) => Ok(AnswerOutcome::Completed(quiz.clone())),
            Err(err) => Err(err),
        };
        Some(outcome)
    }

    /// Drop a session after its results have been persisted.
    pub async fn remove(&self, session_id: Uuid) {
        self.inner.lock().await.remove(&session_id);
    }

    /// Number of sessions currently held (for shutdown logging).
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
