//! The workout a user runs on a given day of the week.

use serde::{Deserialize, Serialize};

use crate::plan::{DayExerciseDetails, TrainingPlanListItem};
use crate::types::{DbId, Timestamp};

/// The active plan's session for one weekday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayWorkout {
    pub training_plan: TrainingPlanListItem,
    pub training_day: WorkoutDay,
    pub exercises: Vec<DayExerciseDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub id: DbId,
    pub weekday: i16,
    pub created_at: Timestamp,
}
