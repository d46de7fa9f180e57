//! AI content gateway for the Gradient backend.
//!
//! Wraps the OpenAI chat-completion HTTP API behind three typed
//! operations: quiz question generation, study-plan generation, and
//! project-idea generation. Prompt construction, response sanitization
//! (markdown fence stripping), and strict payload validation all live
//! here so the rest of the system only ever sees typed payloads or a
//! typed error.

pub mod client;
pub mod gateway;
pub mod prompts;
pub mod sanitize;

pub use client::{OpenAiClient, OpenAiConfig, OpenAiError};
pub use gateway::{
    ContentGateway, GatewayError, ProjectIdeaPayload, QuizQuestionsPayload, StudyPlanPayload,
};
