//! Repository for the `training_days` table.

use gymplan_core::types::DbId;
use sqlx::PgPool;

use crate::models::training_day::TrainingDay;

const COLUMNS: &str = "id, plan_id, weekday, created_at";

pub struct TrainingDayRepo;

impl TrainingDayRepo {
    /// Insert a day for a plan, returning the created row.
    pub async fn create(
        pool: &PgPool,
        plan_id: DbId,
        weekday: i16,
    ) -> Result<TrainingDay, sqlx::Error> {
        let query = format!(
            "INSERT INTO training_days (plan_id, weekday)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrainingDay>(&query)
            .bind(plan_id)
            .bind(weekday)
            .fetch_one(pool)
            .await
    }

    pub async fn count_by_plan(pool: &PgPool, plan_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM training_days WHERE plan_id = $1")
            .bind(plan_id)
            .fetch_one(pool)
            .await
    }

    /// List the days of a plan ordered by weekday ascending.
    pub async fn list_by_plan(pool: &PgPool, plan_id: DbId) -> Result<Vec<TrainingDay>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM training_days
             WHERE plan_id = $1
             ORDER BY weekday ASC, created_at ASC"
        );
        sqlx::query_as::<_, TrainingDay>(&query)
            .bind(plan_id)
            .fetch_all(pool)
            .await
    }

    /// Find the plan's day for a given weekday.
    pub async fn find_by_weekday(
        pool: &PgPool,
        plan_id: DbId,
        weekday: i16,
    ) -> Result<Option<TrainingDay>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM training_days
             WHERE plan_id = $1 AND weekday = $2
             ORDER BY created_at ASC
             LIMIT 1"
        );
        sqlx::query_as::<_, TrainingDay>(&query)
            .bind(plan_id)
            .bind(weekday)
            .fetch_optional(pool)
            .await
    }
}
