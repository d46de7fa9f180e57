//! HTTP handler functions, grouped by resource.

pub mod generation;
pub mod modules;
pub mod quiz;
pub mod users;
