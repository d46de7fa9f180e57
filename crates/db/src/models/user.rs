//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gradient_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub display_name: String,
    pub email: String,
    /// The course the user is studying; chosen after signup.
    pub course: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a user profile.
#[derive(Debug, Clone, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(length(min = 1, message = "displayName must not be empty"))]
    pub display_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
}

/// DTO for setting the user's course.
#[derive(Debug, Clone, Deserialize)]
pub struct SetCourse {
    pub course: String,
}
