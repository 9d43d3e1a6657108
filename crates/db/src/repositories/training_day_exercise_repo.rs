//! Repository for the `training_day_exercises` table.

use gymplan_core::types::DbId;
use sqlx::PgPool;

use crate::models::training_day_exercise::{
    CreateTrainingDayExercise, TrainingDayExercise, TrainingDayExerciseWithName,
};

const COLUMNS: &str =
    "id, day_id, exercise_id, order_index, sets, repetitions, rest_time_seconds, created_at";

pub struct TrainingDayExerciseRepo;

impl TrainingDayExerciseRepo {
    /// Link an exercise to a training day, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTrainingDayExercise,
    ) -> Result<TrainingDayExercise, sqlx::Error> {
        let query = format!(
            "INSERT INTO training_day_exercises
                (day_id, exercise_id, order_index, sets, repetitions, rest_time_seconds)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrainingDayExercise>(&query)
            .bind(input.day_id)
            .bind(input.exercise_id)
            .bind(input.order_index)
            .bind(input.sets)
            .bind(input.repetitions)
            .bind(input.rest_time_seconds)
            .fetch_one(pool)
            .await
    }

    /// Count exercise links across every day of a plan.
    pub async fn count_by_plan(pool: &PgPool, plan_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM training_day_exercises tde
             JOIN training_days td ON td.id = tde.day_id
             WHERE td.plan_id = $1",
        )
        .bind(plan_id)
        .fetch_one(pool)
        .await
    }

    /// List a day's links with exercise names, ordered by `order_index`.
    pub async fn list_by_day(
        pool: &PgPool,
        day_id: DbId,
    ) -> Result<Vec<TrainingDayExerciseWithName>, sqlx::Error> {
        sqlx::query_as::<_, TrainingDayExerciseWithName>(
            "SELECT tde.id, tde.day_id, tde.exercise_id, e.name AS exercise_name,
                    tde.order_index, tde.sets, tde.repetitions, tde.rest_time_seconds
             FROM training_day_exercises tde
             JOIN exercises e ON e.id = tde.exercise_id
             WHERE tde.day_id = $1
             ORDER BY tde.order_index ASC, tde.created_at ASC",
        )
        .bind(day_id)
        .fetch_all(pool)
        .await
    }
}
