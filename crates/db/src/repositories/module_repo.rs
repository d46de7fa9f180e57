//! Repository for the `modules` table.

use sqlx::types::Json;
use sqlx::PgPool;

use gradient_core::study_plan::StudyPlan;
use gradient_core::topics::merge_topic_maps;
use gradient_core::types::DbId;

use crate::models::module::{AddModule, QuizResultUpdate, StudyModule};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, description, proficiency, has_been_tested, \
     last_tested, strong_topics, weak_topics, study_plan, created_at, updated_at";

/// Provides CRUD operations for learning modules. Every method is keyed
/// by `user_id`; a module belonging to another user behaves as missing.
pub struct ModuleRepo;

impl ModuleRepo {
    /// Insert a new module for a user: proficiency 0, untested, no plan.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &AddModule,
    ) -> Result<StudyModule, sqlx::Error> {
        let query = format!(
            "INSERT INTO modules (user_id, name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudyModule>(&query)
            .bind(user_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List a user's modules, most recently created first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<StudyModule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM modules
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, StudyModule>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find one of the user's modules by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        module_id: DbId,
    ) -> Result<Option<StudyModule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM modules
             WHERE id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, StudyModule>(&query)
            .bind(module_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Save the module description.
    ///
    /// Returns `None` if the module does not exist for this user.
    pub async fn save_description(
        pool: &PgPool,
        user_id: DbId,
        module_id: DbId,
        description: &str,
    ) -> Result<Option<StudyModule>, sqlx::Error> {
        let query = format!(
            "UPDATE modules SET description = $3, updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudyModule>(&query)
            .bind(module_id)
            .bind(user_id)
            .bind(description)
            .fetch_optional(pool)
            .await
    }

    /// Fold a scored quiz attempt into the module row.
    ///
    /// Runs in a transaction: the row is read `FOR UPDATE`, topic deltas
    /// are merged into the stored maps (last-write-wins per topic, maps
    /// kept disjoint), proficiency takes the greater of stored and new
    /// (a quiz attempt never lowers it), and the tested flags are set.
    ///
    /// Returns `None` if the module does not exist for this user.
    pub async fn apply_quiz_result(
        pool: &PgPool,
        user_id: DbId,
        module_id: DbId,
        update: &QuizResultUpdate,
    ) -> Result<Option<StudyModule>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!(
            "SELECT {COLUMNS} FROM modules
             WHERE id = $1 AND user_id = $2
             FOR UPDATE"
        );
        let Some(current) = sqlx::query_as::<_, StudyModule>(&select)
            .bind(module_id)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let (strong, weak) = merge_topic_maps(
            &current.strong_topics.0,
            &current.weak_topics.0,
            &update.strong_delta,
            &update.weak_delta,
        );
        let proficiency = current.proficiency.max(update.new_proficiency);

        let apply = format!(
            "UPDATE modules SET
                proficiency = $3,
                has_been_tested = TRUE,
                last_tested = NOW(),
                strong_topics = $4,
                weak_topics = $5,
                updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, StudyModule>(&apply)
            .bind(module_id)
            .bind(user_id)
            .bind(proficiency)
            .bind(Json(&strong))
            .bind(Json(&weak))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::info!(
            user_id,
            module_id,
            proficiency = updated.proficiency,
            "Applied quiz result"
        );
        Ok(Some(updated))
    }

    /// Replace the module's study plan document.
    ///
    /// Returns `None` if the module does not exist for this user.
    pub async fn save_study_plan(
        pool: &PgPool,
        user_id: DbId,
        module_id: DbId,
        plan: &StudyPlan,
    ) -> Result<Option<StudyModule>, sqlx::Error> {
        let query = format!(
            "UPDATE modules SET study_plan = $3, updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudyModule>(&query)
            .bind(module_id)
            .bind(user_id)
            .bind(Json(plan))
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a module. Returns `true` if a row was removed.
    ///
    /// The typed name-match confirmation is enforced by the caller before
    /// this is reached.
    pub async fn delete(
        pool: &PgPool,
        user_id: DbId,
        module_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM modules WHERE id = $1 AND user_id = $2")
            .bind(module_id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
