//! Repository for the `training_plans` table.

use gymplan_core::types::DbId;
use sqlx::PgPool;

use crate::models::training_plan::{CreateTrainingPlan, TrainingPlan};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, description, is_active, source, created_at";

/// Provides CRUD operations for training plans.
pub struct TrainingPlanRepo;

impl TrainingPlanRepo {
    /// Insert a new training plan, returning the created row.
    ///
    /// If `is_active` is `None`, defaults to `false`.
    /// If `source` is `None`, defaults to `'manual'`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTrainingPlan,
    ) -> Result<TrainingPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO training_plans (user_id, name, description, is_active, source)
             VALUES ($1, $2, $3, COALESCE($4, false), COALESCE($5, 'manual'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrainingPlan>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_active)
            .bind(&input.source)
            .fetch_one(pool)
            .await
    }

    /// Find a training plan by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TrainingPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM training_plans WHERE id = $1");
        sqlx::query_as::<_, TrainingPlan>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Exact number of plans owned by a user.
    pub async fn count_by_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM training_plans WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// List a user's plans, newest first, windowed by `offset` / `limit`.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<TrainingPlan>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM training_plans
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             OFFSET $2 LIMIT $3"
        );
        sqlx::query_as::<_, TrainingPlan>(&query)
            .bind(user_id)
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// The user's most recently created active plan.
    pub async fn find_latest_active(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<TrainingPlan>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM training_plans
             WHERE user_id = $1 AND is_active = true
             ORDER BY created_at DESC, id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, TrainingPlan>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Set the `is_active` flag. Returns `true` if a row was updated.
    pub async fn set_active(pool: &PgPool, id: DbId, is_active: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE training_plans SET is_active = $2 WHERE id = $1")
            .bind(id)
            .bind(is_active)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a plan; days and links go with it via
    /// `ON DELETE CASCADE`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM training_plans WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
