//! Domain logic for the Gradient study companion.
//!
//! Pure types and functions with no I/O: the proficiency model, the
//! per-attempt topic classifier, the quiz session state machine, and
//! study-plan types with retake gating. Persistence and HTTP live in
//! the `gradient-db` and `gradient-api` crates.

pub mod error;
pub mod modules;
pub mod proficiency;
pub mod quiz;
pub mod study_plan;
pub mod topics;
pub mod types;
