//! Background tasks.
//!
//! Each submodule provides a spawn function that runs work on the
//! `TaskTracker` held in [`crate::state::AppState`], so in-flight tasks
//! can be awaited (or logged as abandoned) at shutdown.

pub mod study_plan;
