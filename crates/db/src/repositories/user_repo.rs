//! Repository for the `users` table.

use sqlx::PgPool;

use gradient_core::types::DbId;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, display_name, email, course, created_at, updated_at";

/// Provides CRUD operations for user profiles.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user profile, returning the created row. The course is
    /// NULL until the user selects one.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (display_name, email)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.display_name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, user_id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Set (or change) the user's course.
    ///
    /// Returns `None` if no user with the given ID exists.
    pub async fn set_course(
        pool: &PgPool,
        user_id: DbId,
        course: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET course = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .bind(course)
            .fetch_optional(pool)
            .await
    }
}
