//! Quiz question types and the quiz session state machine.
//!
//! A session moves Intro -> Active -> Completed. Intro is the phase before
//! a question batch exists; constructing a [`QuizSession`] (which validates
//! the batch) is the Intro -> Active transition, so a failed fetch or a
//! malformed batch never produces a session. Progression is forward-only:
//! an answer is recorded for the current question and cannot be revised or
//! skipped.

use std::collections::BTreeMap;

use crate::error::CoreError;

/// Number of questions requested per quiz attempt.
pub const QUIZ_BATCH_SIZE: usize = 10;

// ---------------------------------------------------------------------------
// Answers and questions
// ---------------------------------------------------------------------------

/// One of the four answer slots of a multiple-choice question.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum AnswerChoice {
    A,
    B,
    C,
    D,
}

impl AnswerChoice {
    /// All four choices in display order.
    pub const ALL: [AnswerChoice; 4] = [Self::A, Self::B, Self::C, Self::D];
}

impl std::fmt::Display for AnswerChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        f.write_str(letter)
    }
}

/// A generated multiple-choice question. Immutable once generated.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Question {
    pub question: String,
    /// Exactly four entries keyed A-D (enforced by [`validate_question_batch`]).
    pub answers: BTreeMap<AnswerChoice, String>,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: AnswerChoice,
    pub topic: String,
}

/// Validate a generated question batch before a session may start.
///
/// Rejects an empty batch, questions with missing text or topic, and
/// answer maps that do not carry exactly the four A-D entries. The letter
/// fields themselves are shape-checked at deserialization time by
/// [`AnswerChoice`].
pub fn validate_question_batch(questions: &[Question]) -> Result<(), CoreError> {
    if questions.is_empty() {
        return Err(CoreError::Validation(
            "question batch is empty".into(),
        ));
    }
    for (index, q) in questions.iter().enumerate() {
        if q.question.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "question {index} has empty text"
            )));
        }
        if q.topic.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "question {index} has empty topic"
            )));
        }
        if q.answers.len() != AnswerChoice::ALL.len() {
            return Err(CoreError::Validation(format!(
                "question {index} has {} answers, expected {}",
                q.answers.len(),
                AnswerChoice::ALL.len()
            )));
        }
        for choice in AnswerChoice::ALL {
            match q.answers.get(&choice) {
                Some(text) if !text.trim().is_empty() => {}
                Some(_) => {
                    return Err(CoreError::Validation(format!(
                        "question {index} has an empty answer for {choice}"
                    )))
                }
                None => {
                    return Err(CoreError::Validation(format!(
                        "question {index} is missing answer {choice}"
                    )))
                }
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Session state machine
// ---------------------------------------------------------------------------

/// Outcome of submitting an answer to the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The session advanced to the question at this index.
    Advanced { next_index: usize },
    /// The last question was answered; the session is now Completed.
    Completed,
}

/// Final tally of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

/// An active or completed quiz attempt.
///
/// Holds the validated question batch, the append-only answer map, and the
/// 0-based index of the question currently awaiting an answer.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: BTreeMap<usize, AnswerChoice>,
    current_index: usize,
    completed: bool,
}

impl QuizSession {
    /// Start a session from a generated batch (Intro -> Active).
    ///
    /// Fails if the batch does not validate; no session exists in that case.
    pub fn new(questions: Vec<Question>) -> Result<Self, CoreError> {
        validate_question_batch(&questions)?;
        Ok(Self {
            questions,
            answers: BTreeMap::new(),
            current_index: 0,
            completed: false,
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// 0-based index of the question currently awaiting an answer.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Record an answer for the current question and advance.
    ///
    /// Forward-only: each question is answered exactly once, in order.
    /// Submitting to a completed session is a conflict.
    pub fn submit_answer(&mut self, answer: AnswerChoice) -> Result<SubmitOutcome, CoreError> {
        if self.completed {
            return Err(CoreError::Conflict(
                "quiz session is already completed".into(),
            ));
        }
        self.answers.insert(self.current_index, answer);
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            Ok(SubmitOutcome::Advanced {
                next_index: self.current_index,
            })
        } else {
            self.completed = true;
            Ok(SubmitOutcome::Completed)
        }
    }

    /// Answers recorded so far, keyed by question index.
    pub fn answers(&self) -> &BTreeMap<usize, AnswerChoice> {
        &self.answers
    }

    /// Tally correct answers. Only meaningful once the session is Completed.
    pub fn score(&self) -> Result<QuizScore, CoreError> {
        if !self.completed {
            return Err(CoreError::Conflict(
                "quiz session is not completed yet".into(),
            ));
        }
        let correct = self
            .questions
            .iter()
            .enumerate()
            .filter(|(index, q)| self.answers.get(index) == Some(&q.correct_answer))
            .count();
        Ok(QuizScore {
            correct,
            total: self.questions.len(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn question(topic: &str, correct: AnswerChoice) -> Question {
        let answers = AnswerChoice::ALL
            .into_iter()
            .map(|c| (c, format!("answer {c}")))
            .collect();
        Question {
            question: format!("a question about {topic}?"),
            answers,
            correct_answer: correct,
            topic: topic.to_string(),
        }
    }

    fn batch(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| question(&format!("topic-{i}"), AnswerChoice::B))
            .collect()
    }

    // -- batch validation --

    #[test]
    fn empty_batch_is_rejected() {
        assert!(QuizSession::new(vec![]).is_err());
    }

    #[test]
    fn missing_answer_slot_is_rejected() {
        let mut q = question("ownership", AnswerChoice::A);
        q.answers.remove(&AnswerChoice::D);
        assert!(validate_question_batch(&[q]).is_err());
    }

    #[test]
    fn blank_answer_text_is_rejected() {
        let mut q = question("ownership", AnswerChoice::A);
        q.answers.insert(AnswerChoice::C, "  ".into());
        assert!(validate_question_batch(&[q]).is_err());
    }

    #[test]
    fn blank_topic_is_rejected() {
        let mut q = question("ownership", AnswerChoice::A);
        q.topic = String::new();
        assert!(validate_question_batch(&[q]).is_err());
    }

    #[test]
    fn blank_question_text_is_rejected() {
        let mut q = question("ownership", AnswerChoice::A);
        q.question = "   ".into();
        assert!(validate_question_batch(&[q]).is_err());
    }

    #[test]
    fn full_batch_validates() {
        assert!(validate_question_batch(&batch(QUIZ_BATCH_SIZE)).is_ok());
    }

    // -- session progression --

    #[test]
    fn answers_advance_until_completion() {
        let mut session = QuizSession::new(batch(3)).unwrap();
        assert_eq!(session.current_index(), 0);

        assert_eq!(
            session.submit_answer(AnswerChoice::A).unwrap(),
            SubmitOutcome::Advanced { next_index: 1 }
        );
        assert_eq!(
            session.submit_answer(AnswerChoice::B).unwrap(),
            SubmitOutcome::Advanced { next_index: 2 }
        );
        assert_eq!(
            session.submit_answer(AnswerChoice::C).unwrap(),
            SubmitOutcome::Completed
        );
        assert!(session.is_completed());
    }

    #[test]
    fn submitting_after_completion_is_a_conflict() {
        let mut session = QuizSession::new(batch(1)).unwrap();
        session.submit_answer(AnswerChoice::A).unwrap();
        assert!(session.submit_answer(AnswerChoice::A).is_err());
    }

    #[test]
    fn score_requires_completion() {
        let session = QuizSession::new(batch(2)).unwrap();
        assert!(session.score().is_err());
    }

    #[test]
    fn score_counts_correct_answers() {
        // Correct answer is B for every generated question.
        let mut session = QuizSession::new(batch(3)).unwrap();
        session.submit_answer(AnswerChoice::B).unwrap();
        session.submit_answer(AnswerChoice::A).unwrap();
        session.submit_answer(AnswerChoice::B).unwrap();

        let score = session.score().unwrap();
        assert_eq!(score.correct, 2);
        assert_eq!(score.total, 3);
    }

    #[test]
    fn single_question_session_completes_immediately() {
        let mut session = QuizSession::new(batch(1)).unwrap();
        assert_eq!(
            session.submit_answer(AnswerChoice::D).unwrap(),
            SubmitOutcome::Completed
        );
    }

    // -- serde shape --

    #[test]
    fn question_deserializes_from_wire_shape() {
        let json = r#"{
            "question": "What does ownership mean?",
            "answers": {"A": "a", "B": "b", "C": "c", "D": "d"},
            "correctAnswer": "C",
            "topic": "Ownership"
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.correct_answer, AnswerChoice::C);
        assert_eq!(q.answers.len(), 4);
    }

    #[test]
    fn invalid_answer_letter_fails_deserialization() {
        let json = r#"{
            "question": "q",
            "answers": {"A": "a", "B": "b", "C": "c", "D": "d"},
            "correctAnswer": "E",
            "topic": "t"
        }"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }
}
