//! Row-level gateway to the plan data store.
//!
//! [`PlanStore`] covers the four collections a plan spans
//! (`training_plans`, `training_days`, `exercises`,
//! `training_day_exercises`). Implementations are expected to cascade a
//! plan delete to its days and their exercise links; exercises themselves
//! are shared rows and are never removed by a plan delete.

use async_trait::async_trait;

use crate::plan::PlanSource;
use crate::types::{DbId, Timestamp};

/// A failure reported by the underlying store.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A row from `training_plans`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRecord {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub source: PlanSource,
    pub created_at: Timestamp,
}

/// Input for inserting a plan row.
#[derive(Debug, Clone)]
pub struct NewPlan {
    pub owner_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub source: PlanSource,
}

/// A row from `training_days`.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub id: DbId,
    pub plan_id: DbId,
    pub weekday: i16,
    pub created_at: Timestamp,
}

/// Input for inserting a `training_day_exercises` link row.
#[derive(Debug, Clone)]
pub struct NewDayExercise {
    pub day_id: DbId,
    pub exercise_id: DbId,
    pub order_index: i32,
    pub sets: i32,
    pub repetitions: i32,
    pub rest_time_seconds: i32,
}

/// A `training_day_exercises` link joined with its exercise name.
#[derive(Debug, Clone, PartialEq)]
pub struct DayExerciseRecord {
    pub id: DbId,
    pub day_id: DbId,
    pub exercise_id: DbId,
    pub exercise_name: String,
    pub order_index: i32,
    pub sets: i32,
    pub repetitions: i32,
    pub rest_time_seconds: i32,
}

#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Cheap reachability probe used by the health endpoint.
    async fn ping(&self) -> StoreResult<()>;

    async fn insert_plan(&self, plan: &NewPlan) -> StoreResult<DbId>;

    async fn insert_day(&self, plan_id: DbId, weekday: i16) -> StoreResult<DbId>;

    /// Always inserts a fresh exercise row; names are not de-duplicated.
    async fn insert_exercise(&self, name: &str) -> StoreResult<DbId>;

    async fn insert_day_exercise(&self, link: &NewDayExercise) -> StoreResult<DbId>;

    /// Delete a plan and, by cascade, its days and links.
    ///
    /// Returns `false` when no row matched `plan_id`.
    async fn delete_plan(&self, plan_id: DbId) -> StoreResult<bool>;

    async fn find_plan(&self, plan_id: DbId) -> StoreResult<Option<PlanRecord>>;

    async fn count_plans(&self, owner_id: DbId) -> StoreResult<i64>;

    /// Plans for `owner_id`, newest first, windowed by `offset` / `limit`.
    async fn list_plans(
        &self,
        owner_id: DbId,
        offset: i64,
        limit: i64,
    ) -> StoreResult<Vec<PlanRecord>>;

    /// Set the active flag. Returns `false` when no row matched `plan_id`.
    async fn set_plan_active(&self, plan_id: DbId, is_active: bool) -> StoreResult<bool>;

    /// The owner's most recently created active plan, if any.
    async fn find_latest_active_plan(&self, owner_id: DbId) -> StoreResult<Option<PlanRecord>>;

    async fn count_days(&self, plan_id: DbId) -> StoreResult<i64>;

    /// Exercise links across every day of the plan.
    async fn count_plan_exercises(&self, plan_id: DbId) -> StoreResult<i64>;

    /// Days of a plan ordered by weekday ascending.
    async fn list_days(&self, plan_id: DbId) -> StoreResult<Vec<DayRecord>>;

    async fn find_day_by_weekday(
        &self,
        plan_id: DbId,
        weekday: i16,
    ) -> StoreResult<Option<DayRecord>>;

    /// Exercise links of a day ordered by `order_index` ascending.
    async fn list_day_exercises(&self, day_id: DbId) -> StoreResult<Vec<DayExerciseRecord>>;
}
