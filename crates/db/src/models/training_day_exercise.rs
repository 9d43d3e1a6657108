//! Training day exercise link model and DTOs.

use gymplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `training_day_exercises` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrainingDayExercise {
    pub id: DbId,
    pub day_id: DbId,
    pub exercise_id: DbId,
    pub order_index: i32,
    pub sets: i32,
    pub repetitions: i32,
    pub rest_time_seconds: i32,
    pub created_at: Timestamp,
}

/// A link row joined with the name of its exercise.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrainingDayExerciseWithName {
    pub id: DbId,
    pub day_id: DbId,
    pub exercise_id: DbId,
    pub exercise_name: String,
    pub order_index: i32,
    pub sets: i32,
    pub repetitions: i32,
    pub rest_time_seconds: i32,
}

/// DTO for linking an exercise to a training day.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrainingDayExercise {
    pub day_id: DbId,
    pub exercise_id: DbId,
    pub order_index: i32,
    pub sets: i32,
    pub repetitions: i32,
    pub rest_time_seconds: i32,
}
