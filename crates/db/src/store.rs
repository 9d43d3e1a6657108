//! [`PlanStore`] backed by PostgreSQL.

use async_trait::async_trait;
use gymplan_core::plan::PlanSource;
use gymplan_core::store::{
    DayExerciseRecord, DayRecord, NewDayExercise, NewPlan, PlanRecord, PlanStore, StoreError,
    StoreResult,
};
use gymplan_core::types::DbId;

use crate::models::training_day::TrainingDay;
use crate::models::training_day_exercise::{CreateTrainingDayExercise, TrainingDayExerciseWithName};
use crate::models::training_plan::{CreateTrainingPlan, TrainingPlan};
use crate::repositories::{ExerciseRepo, TrainingDayExerciseRepo, TrainingDayRepo, TrainingPlanRepo};
use crate::DbPool;

/// Plan store issuing one statement per gateway call against a pool.
#[derive(Clone)]
pub struct PgPlanStore {
    pool: DbPool,
}

impl PgPlanStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn store_err(err: sqlx::Error) -> StoreError {
    tracing::debug!(error = %err, "Plan store query failed");
    StoreError::new(err.to_string())
}

fn plan_record(row: TrainingPlan) -> StoreResult<PlanRecord> {
    let source = row
        .source
        .parse::<PlanSource>()
        .map_err(|e| StoreError::new(e.to_string()))?;
    Ok(PlanRecord {
        id: row.id,
        owner_id: row.user_id,
        name: row.name,
        description: row.description,
        is_active: row.is_active,
        source,
        created_at: row.created_at,
    })
}

fn day_record(row: TrainingDay) -> DayRecord {
    DayRecord {
        id: row.id,
        plan_id: row.plan_id,
        weekday: row.weekday,
        created_at: row.created_at,
    }
}

fn day_exercise_record(row: TrainingDayExerciseWithName) -> DayExerciseRecord {
    DayExerciseRecord {
        id: row.id,
        day_id: row.day_id,
        exercise_id: row.exercise_id,
        exercise_name: row.exercise_name,
        order_index: row.order_index,
        sets: row.sets,
        repetitions: row.repetitions,
        rest_time_seconds: row.rest_time_seconds,
    }
}

#[async_trait]
impl PlanStore for PgPlanStore {
    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await.map_err(store_err)
    }

    async fn insert_plan(&self, plan: &NewPlan) -> StoreResult<DbId> {
        let input = CreateTrainingPlan {
            user_id: plan.owner_id,
            name: plan.name.clone(),
            description: plan.description.clone(),
            is_active: Some(plan.is_active),
            source: Some(plan.source.as_str().to_string()),
        };
        let row = TrainingPlanRepo::create(&self.pool, &input)
            .await
            .map_err(store_err)?;
        Ok(row.id)
    }

    async fn insert_day(&self, plan_id: DbId, weekday: i16) -> StoreResult<DbId> {
        let row = TrainingDayRepo::create(&self.pool, plan_id, weekday)
            .await
            .map_err(store_err)?;
        Ok(row.id)
    }

    async fn insert_exercise(&self, name: &str) -> StoreResult<DbId> {
        let row = ExerciseRepo::create(&self.pool, name)
            .await
            .map_err(store_err)?;
        Ok(row.id)
    }

    async fn insert_day_exercise(&self, link: &NewDayExercise) -> StoreResult<DbId> {
        let input = CreateTrainingDayExercise {
            day_id: link.day_id,
            exercise_id: link.exercise_id,
            order_index: link.order_index,
            sets: link.sets,
            repetitions: link.repetitions,
            rest_time_seconds: link.rest_time_seconds,
        };
        let row = TrainingDayExerciseRepo::create(&self.pool, &input)
            .await
            .map_err(store_err)?;
        Ok(row.id)
    }

    async fn delete_plan(&self, plan_id: DbId) -> StoreResult<bool> {
        TrainingPlanRepo::delete(&self.pool, plan_id)
            .await
            .map_err(store_err)
    }

    async fn find_plan(&self, plan_id: DbId) -> StoreResult<Option<PlanRecord>> {
        TrainingPlanRepo::find_by_id(&self.pool, plan_id)
            .await
            .map_err(store_err)?
            .map(plan_record)
            .transpose()
    }

    async fn count_plans(&self, owner_id: DbId) -> StoreResult<i64> {
        TrainingPlanRepo::count_by_user(&self.pool, owner_id)
            .await
            .map_err(store_err)
    }

    async fn list_plans(
        &self,
        owner_id: DbId,
        offset: i64,
        limit: i64,
    ) -> StoreResult<Vec<PlanRecord>> {
        TrainingPlanRepo::list_by_user(&self.pool, owner_id, offset, limit)
            .await
            .map_err(store_err)?
            .into_iter()
            .map(plan_record)
            .collect()
    }

    async fn set_plan_active(&self, plan_id: DbId, is_active: bool) -> StoreResult<bool> {
        TrainingPlanRepo::set_active(&self.pool, plan_id, is_active)
            .await
            .map_err(store_err)
    }

    async fn find_latest_active_plan(&self, owner_id: DbId) -> StoreResult<Option<PlanRecord>> {
        TrainingPlanRepo::find_latest_active(&self.pool, owner_id)
            .await
            .map_err(store_err)?
            .map(plan_record)
            .transpose()
    }

    async fn count_days(&self, plan_id: DbId) -> StoreResult<i64> {
        TrainingDayRepo::count_by_plan(&self.pool, plan_id)
            .await
            .map_err(store_err)
    }

    async fn count_plan_exercises(&self, plan_id: DbId) -> StoreResult<i64> {
        TrainingDayExerciseRepo::count_by_plan(&self.pool, plan_id)
            .await
            .map_err(store_err)
    }

    async fn list_days(&self, plan_id: DbId) -> StoreResult<Vec<DayRecord>> {
        let rows = TrainingDayRepo::list_by_plan(&self.pool, plan_id)
            .await
            .map_err(store_err)?;
        Ok(rows.into_iter().map(day_record).collect())
    }

    async fn find_day_by_weekday(
        &self,
        plan_id: DbId,
        weekday: i16,
    ) -> StoreResult<Option<DayRecord>> {
        let row = TrainingDayRepo::find_by_weekday(&self.pool, plan_id, weekday)
            .await
            .map_err(store_err)?;
        Ok(row.map(day_record))
    }

    async fn list_day_exercises(&self, day_id: DbId) -> StoreResult<Vec<DayExerciseRecord>> {
        let rows = TrainingDayExerciseRepo::list_by_day(&self.pool, day_id)
            .await
            .map_err(store_err)?;
        Ok(rows.into_iter().map(day_exercise_record).collect())
    }
}
