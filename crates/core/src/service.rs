//! Training plan orchestration on top of a [`PlanStore`].
//!
//! Plan creation spans four tables and is performed as a sequence of
//! single-row inserts. The store offers no multi-statement transaction at
//! this level, so all-or-nothing behaviour comes from a compensating
//! delete: if any day, exercise or link insert fails after the plan row
//! exists, the plan row is deleted (cascading to whatever days and links
//! were already written) and the original error is returned.
//!
//! The compensation is best-effort. Readers running concurrently may
//! observe the partially built plan until the delete lands, and a failing
//! delete is only logged; the caller still receives the original error.

use std::sync::Arc;

use crate::error::CoreError;
use crate::plan::{
    CreateCompletePlan, DayExerciseDetails, ExerciseSummary, Pagination, PlanCreated,
    TrainingDayDetails, TrainingPlanDetails, TrainingPlanList, TrainingPlanListItem, MAX_WEEKDAY,
    MIN_WEEKDAY, PLAN_CREATED_MESSAGE,
};
use crate::store::{DayExerciseRecord, NewDayExercise, NewPlan, PlanRecord, PlanStore};
use crate::types::DbId;
use crate::workout::{TodayWorkout, WorkoutDay};

/// Message attached to the eligibility error raised by [`TrainingPlanService::activate_plan`].
pub const ACTIVATION_REQUIREMENTS_MESSAGE: &str =
    "Cannot activate plan: minimum requirements not met (at least one training day with one exercise required)";

/// Entity name used in not-found errors for plans.
const PLAN_ENTITY: &str = "TrainingPlan";

/// Business operations over training plans.
///
/// Every operation takes the owner or plan id explicitly; the service holds
/// no request-scoped state and is shared across requests behind an `Arc`.
pub struct TrainingPlanService {
    store: Arc<dyn PlanStore>,
}

impl TrainingPlanService {
    pub fn new(store: Arc<dyn PlanStore>) -> Self {
        Self { store }
    }

    /// The underlying store (used by the health check).
    pub fn store(&self) -> &Arc<dyn PlanStore> {
        &self.store
    }

    /// Create a plan with all of its days, exercises and exercise links.
    ///
    /// The plan row is inserted inactive. A failure after the plan row
    /// exists triggers the compensating delete described in the module docs.
    pub async fn create_complete_plan(
        &self,
        command: &CreateCompletePlan,
        owner_id: DbId,
    ) -> Result<PlanCreated, CoreError> {
        let new_plan = NewPlan {
            owner_id,
            name: command.name.clone(),
            description: command.description.clone(),
            is_active: false,
            source: command.source,
        };

        let plan_id = self
            .store
            .insert_plan(&new_plan)
            .await
            .map_err(|e| CoreError::upstream("Failed to create training plan", e))?;

        if let Err(err) = self.insert_plan_rows(plan_id, command).await {
            tracing::warn!(
                %plan_id,
                error = %err,
                "Plan creation failed, deleting partially created plan",
            );
            if let Err(cleanup_err) = self.store.delete_plan(plan_id).await {
                tracing::error!(
                    %plan_id,
                    error = %cleanup_err,
                    "Compensating delete of partially created plan failed",
                );
            }
            return Err(err);
        }

        tracing::info!(
            %plan_id,
            %owner_id,
            source = %command.source,
            days = command.training_days.len(),
            exercises = command.exercise_count(),
            "Training plan created",
        );

        Ok(PlanCreated {
            id: plan_id,
            message: PLAN_CREATED_MESSAGE.to_string(),
        })
    }

    async fn insert_plan_rows(
        &self,
        plan_id: DbId,
        command: &CreateCompletePlan,
    ) -> Result<(), CoreError> {
        for day in &command.training_days {
            let day_id = self
                .store
                .insert_day(plan_id, day.weekday)
                .await
                .map_err(|e| CoreError::upstream("Failed to create training day", e))?;

            for exercise in &day.exercises {
                let exercise_id = self
                    .store
                    .insert_exercise(&exercise.exercise_name)
                    .await
                    .map_err(|e| CoreError::upstream("Failed to create exercise", e))?;

                let link = NewDayExercise {
                    day_id,
                    exercise_id,
                    order_index: exercise.order_index,
                    sets: exercise.sets,
                    repetitions: exercise.repetitions,
                    rest_time_seconds: exercise.rest_time_seconds,
                };
                self.store.insert_day_exercise(&link).await.map_err(|e| {
                    CoreError::upstream("Failed to assign exercise to training day", e)
                })?;
            }
        }
        Ok(())
    }

    /// Whether the plan meets the activation minimum: at least one day, and
    /// at least one exercise link on any of its days.
    pub async fn can_activate_plan(&self, plan_id: DbId) -> Result<bool, CoreError> {
        let days = self
            .store
            .count_days(plan_id)
            .await
            .map_err(|e| CoreError::upstream("Failed to check training days", e))?;
        if days == 0 {
            return Ok(false);
        }

        let exercises = self
            .store
            .count_plan_exercises(plan_id)
            .await
            .map_err(|e| CoreError::upstream("Failed to check exercises", e))?;
        Ok(exercises > 0)
    }

    /// Mark a plan active after re-checking eligibility.
    ///
    /// A missing plan is reported as not found before eligibility is checked.
    /// The not-found branch after the update covers a plan deleted between
    /// the two calls. Other active plans of the same owner are left untouched.
    pub async fn activate_plan(&self, plan_id: DbId) -> Result<(), CoreError> {
        self.find_plan(plan_id).await?;

        if !self.can_activate_plan(plan_id).await? {
            return Err(CoreError::Ineligible(
                ACTIVATION_REQUIREMENTS_MESSAGE.to_string(),
            ));
        }

        let updated = self
            .store
            .set_plan_active(plan_id, true)
            .await
            .map_err(|e| CoreError::upstream("Failed to activate plan", e))?;
        if !updated {
            return Err(CoreError::NotFound {
                entity: PLAN_ENTITY,
                id: plan_id,
            });
        }

        tracing::info!(%plan_id, "Training plan activated");
        Ok(())
    }

    /// One page of the owner's plans, newest first, plus the owner's total.
    ///
    /// `page` and `limit` must be positive, and the resulting row offset must
    /// fit in an `i64`. Capping `limit` is left to the calling boundary.
    pub async fn list_plans(
        &self,
        owner_id: DbId,
        page: u32,
        limit: u32,
    ) -> Result<TrainingPlanList, CoreError> {
        if page == 0 || limit == 0 {
            return Err(CoreError::Validation(
                "page and limit must be positive".to_string(),
            ));
        }
        let offset = i64::from(page - 1)
            .checked_mul(i64::from(limit))
            .ok_or_else(|| CoreError::Validation("page is out of range".to_string()))?;

        let total = self
            .store
            .count_plans(owner_id)
            .await
            .map_err(|e| CoreError::upstream("Failed to get total count", e))?;

        let plans = self
            .store
            .list_plans(owner_id, offset, i64::from(limit))
            .await
            .map_err(|e| CoreError::upstream("Failed to fetch training plans", e))?;

        Ok(TrainingPlanList {
            plans: plans.into_iter().map(list_item).collect(),
            pagination: Pagination { page, limit, total },
        })
    }

    /// Assemble the plan → days → exercises tree.
    pub async fn get_details(&self, plan_id: DbId) -> Result<TrainingPlanDetails, CoreError> {
        let plan = self.find_plan(plan_id).await?;

        let days = self
            .store
            .list_days(plan_id)
            .await
            .map_err(|e| CoreError::upstream("Failed to fetch training days", e))?;

        let mut training_days = Vec::with_capacity(days.len());
        for day in days {
            let exercises = self.day_exercises(day.id).await?;
            training_days.push(TrainingDayDetails {
                id: day.id,
                weekday: day.weekday,
                created_at: day.created_at,
                exercises,
            });
        }

        Ok(TrainingPlanDetails {
            id: plan.id,
            name: plan.name,
            description: plan.description,
            is_active: plan.is_active,
            source: plan.source,
            training_days,
        })
    }

    /// Delete a plan (cascading to its days and links).
    pub async fn delete_plan(&self, plan_id: DbId) -> Result<(), CoreError> {
        let deleted = self
            .store
            .delete_plan(plan_id)
            .await
            .map_err(|e| CoreError::upstream("Failed to delete training plan", e))?;
        if !deleted {
            return Err(CoreError::NotFound {
                entity: PLAN_ENTITY,
                id: plan_id,
            });
        }

        tracing::info!(%plan_id, "Training plan deleted");
        Ok(())
    }

    /// Fail with not-found unless `plan_id` exists and belongs to `owner_id`.
    ///
    /// Plans of other owners are reported as missing so their existence is
    /// not disclosed.
    pub async fn ensure_owned(&self, plan_id: DbId, owner_id: DbId) -> Result<(), CoreError> {
        let plan = self.find_plan(plan_id).await?;
        if plan.owner_id != owner_id {
            tracing::debug!(%plan_id, %owner_id, "Plan belongs to a different owner");
            return Err(CoreError::NotFound {
                entity: PLAN_ENTITY,
                id: plan_id,
            });
        }
        Ok(())
    }

    /// The session scheduled for `weekday` in the owner's most recently
    /// created active plan.
    pub async fn today_workout(
        &self,
        owner_id: DbId,
        weekday: i16,
    ) -> Result<TodayWorkout, CoreError> {
        if !(MIN_WEEKDAY..=MAX_WEEKDAY).contains(&weekday) {
            return Err(CoreError::Validation(format!(
                "Weekday must be between {MIN_WEEKDAY} and {MAX_WEEKDAY}"
            )));
        }

        let plan = self
            .store
            .find_latest_active_plan(owner_id)
            .await
            .map_err(|e| CoreError::upstream("Failed to fetch active plan", e))?
            .ok_or_else(|| CoreError::NotScheduled("No active training plan".to_string()))?;

        let day = self
            .store
            .find_day_by_weekday(plan.id, weekday)
            .await
            .map_err(|e| CoreError::upstream("Failed to fetch training day", e))?
            .ok_or_else(|| {
                CoreError::NotScheduled(format!(
                    "No training day for weekday {weekday} in the active plan"
                ))
            })?;

        let exercises = self.day_exercises(day.id).await?;

        Ok(TodayWorkout {
            training_plan: list_item(plan),
            training_day: WorkoutDay {
                id: day.id,
                weekday: day.weekday,
                created_at: day.created_at,
            },
            exercises,
        })
    }

    // ---- private helpers ----

    async fn find_plan(&self, plan_id: DbId) -> Result<PlanRecord, CoreError> {
        self.store
            .find_plan(plan_id)
            .await
            .map_err(|e| CoreError::upstream("Failed to fetch training plan", e))?
            .ok_or(CoreError::NotFound {
                entity: PLAN_ENTITY,
                id: plan_id,
            })
    }

    async fn day_exercises(&self, day_id: DbId) -> Result<Vec<DayExerciseDetails>, CoreError> {
        let mut links = self
            .store
            .list_day_exercises(day_id)
            .await
            .map_err(|e| CoreError::upstream("Failed to fetch training day exercises", e))?;
        links.sort_by_key(|link| link.order_index);
        Ok(links.into_iter().map(exercise_details).collect())
    }
}

fn list_item(plan: PlanRecord) -> TrainingPlanListItem {
    TrainingPlanListItem {
        id: plan.id,
        name: plan.name,
        description: plan.description,
        is_active: plan.is_active,
        source: plan.source,
        created_at: plan.created_at,
    }
}

fn exercise_details(link: DayExerciseRecord) -> DayExerciseDetails {
    DayExerciseDetails {
        id: link.id,
        exercise: ExerciseSummary {
            id: link.exercise_id,
            name: link.exercise_name,
        },
        order_index: link.order_index,
        sets: link.sets,
        repetitions: link.repetitions,
        rest_time_seconds: link.rest_time_seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryPlanStore, StoreOp};
    use crate::plan::{CreateDayExercise, CreateTrainingDay, PlanSource};
    use assert_matches::assert_matches;
    use uuid::Uuid;

    fn service() -> (TrainingPlanService, Arc<MemoryPlanStore>) {
        let store = Arc::new(MemoryPlanStore::new());
        (TrainingPlanService::new(store.clone()), store)
    }

    fn exercise(name: &str, order_index: i32) -> CreateDayExercise {
        CreateDayExercise {
            exercise_name: name.to_string(),
            order_index,
            sets: 3,
            repetitions: 10,
            rest_time_seconds: 90,
        }
    }

    fn command() -> CreateCompletePlan {
        CreateCompletePlan {
            name: "Strength Training Plan".to_string(),
            description: Some("A 3-day strength training program".to_string()),
            training_days: vec![
                CreateTrainingDay {
                    weekday: 3,
                    exercises: vec![exercise("Deadlift", 0)],
                },
                CreateTrainingDay {
                    weekday: 1,
                    exercises: vec![
                        exercise("Squat", 1),
                        exercise("Bench Press", 0),
                        exercise("Row", 2),
                    ],
                },
            ],
            source: PlanSource::Manual,
        }
    }

    async fn new_bare_plan(store: &MemoryPlanStore, owner_id: DbId) -> DbId {
        store
            .insert_plan(&NewPlan {
                owner_id,
                name: "Bare".to_string(),
                description: None,
                is_active: false,
                source: PlanSource::Manual,
            })
            .await
            .unwrap()
    }

    // -- create_complete_plan --

    #[tokio::test]
    async fn create_then_details_preserves_shape_and_order() {
        let (svc, _) = service();
        let owner = Uuid::new_v4();

        let created = svc.create_complete_plan(&command(), owner).await.unwrap();
        assert_eq!(created.message, PLAN_CREATED_MESSAGE);

        let details = svc.get_details(created.id).await.unwrap();
        assert_eq!(details.name, "Strength Training Plan");
        assert!(!details.is_active);
        assert_eq!(details.source, PlanSource::Manual);

        // Days come back by weekday ascending.
        let weekdays: Vec<i16> = details.training_days.iter().map(|d| d.weekday).collect();
        assert_eq!(weekdays, vec![1, 3]);

        let monday: Vec<(&str, i32)> = details.training_days[0]
            .exercises
            .iter()
            .map(|e| (e.exercise.name.as_str(), e.order_index))
            .collect();
        assert_eq!(monday, vec![("Bench Press", 0), ("Squat", 1), ("Row", 2)]);
        assert_eq!(details.training_days[1].exercises.len(), 1);
    }

    #[tokio::test]
    async fn create_inserts_a_fresh_exercise_per_assignment() {
        let (svc, store) = service();
        let mut cmd = command();
        cmd.training_days[0].exercises.push(exercise("Deadlift", 1));

        svc.create_complete_plan(&cmd, Uuid::new_v4()).await.unwrap();
        assert_eq!(store.exercise_count(), 5);
    }

    #[tokio::test]
    async fn plan_insert_failure_needs_no_cleanup() {
        let (svc, store) = service();
        store.fail_on(StoreOp::InsertPlan);

        let err = svc
            .create_complete_plan(&command(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Failed to create training plan"));
        assert_eq!(store.calls(StoreOp::DeletePlan), 0);
        assert_eq!(store.plan_count(), 0);
    }

    #[tokio::test]
    async fn day_insert_failure_deletes_plan() {
        let (svc, store) = service();
        store.fail_after(StoreOp::InsertDay, 1);

        let err = svc
            .create_complete_plan(&command(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert_matches!(
            err,
            CoreError::Upstream { context: "Failed to create training day", .. }
        );
        assert_eq!(store.calls(StoreOp::DeletePlan), 1);
        assert_eq!(store.plan_count(), 0);
        assert_eq!(store.day_count(), 0);
        assert_eq!(store.link_count(), 0);
    }

    #[tokio::test]
    async fn exercise_insert_failure_deletes_plan() {
        let (svc, store) = service();
        store.fail_after(StoreOp::InsertExercise, 2);

        let err = svc
            .create_complete_plan(&command(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Failed to create exercise"));
        assert_eq!(store.plan_count(), 0);
        assert_eq!(store.day_count(), 0);
        assert_eq!(store.link_count(), 0);
    }

    #[tokio::test]
    async fn link_insert_failure_deletes_plan() {
        let (svc, store) = service();
        store.fail_on(StoreOp::InsertDayExercise);

        let err = svc
            .create_complete_plan(&command(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(err
            .to_string()
            .starts_with("Failed to assign exercise to training day"));
        assert_eq!(store.plan_count(), 0);
    }

    #[tokio::test]
    async fn failed_cleanup_still_returns_original_error() {
        let (svc, store) = service();
        store.fail_on(StoreOp::InsertDay);
        store.fail_on(StoreOp::DeletePlan);

        let err = svc
            .create_complete_plan(&command(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert_matches!(
            err,
            CoreError::Upstream { context: "Failed to create training day", .. }
        );
        assert_eq!(store.calls(StoreOp::DeletePlan), 1);
    }

    // -- can_activate_plan / activate_plan --

    #[tokio::test]
    async fn plan_without_days_cannot_be_activated() {
        let (svc, store) = service();
        let plan_id = new_bare_plan(&store, Uuid::new_v4()).await;

        assert!(!svc.can_activate_plan(plan_id).await.unwrap());
    }

    #[tokio::test]
    async fn plan_whose_only_day_is_empty_cannot_be_activated() {
        let (svc, store) = service();
        let plan_id = new_bare_plan(&store, Uuid::new_v4()).await;
        store.insert_day(plan_id, 2).await.unwrap();

        assert!(!svc.can_activate_plan(plan_id).await.unwrap());
    }

    #[tokio::test]
    async fn exercises_on_any_day_make_plan_eligible() {
        let (svc, store) = service();
        let plan_id = new_bare_plan(&store, Uuid::new_v4()).await;
        store.insert_day(plan_id, 0).await.unwrap();
        let second_day = store.insert_day(plan_id, 4).await.unwrap();
        let exercise_id = store.insert_exercise("Lunge").await.unwrap();
        store
            .insert_day_exercise(&NewDayExercise {
                day_id: second_day,
                exercise_id,
                order_index: 0,
                sets: 3,
                repetitions: 12,
                rest_time_seconds: 45,
            })
            .await
            .unwrap();

        assert!(svc.can_activate_plan(plan_id).await.unwrap());
    }

    #[tokio::test]
    async fn activate_sets_flag_on_eligible_plan() {
        let (svc, _) = service();
        let created = svc
            .create_complete_plan(&command(), Uuid::new_v4())
            .await
            .unwrap();

        svc.activate_plan(created.id).await.unwrap();
        assert!(svc.get_details(created.id).await.unwrap().is_active);
    }

    #[tokio::test]
    async fn activate_ineligible_plan_leaves_flag_unchanged() {
        let (svc, store) = service();
        let plan_id = new_bare_plan(&store, Uuid::new_v4()).await;

        let err = svc.activate_plan(plan_id).await.unwrap_err();
        assert_matches!(err, CoreError::Ineligible(_));
        assert!(!svc.get_details(plan_id).await.unwrap().is_active);
        assert_eq!(store.calls(StoreOp::SetPlanActive), 0);
    }

    #[tokio::test]
    async fn activate_missing_plan_is_not_found() {
        let (svc, store) = service();

        let err = svc.activate_plan(Uuid::new_v4()).await.unwrap_err();
        assert_matches!(err, CoreError::NotFound { entity: "TrainingPlan", .. });
        assert_eq!(store.calls(StoreOp::CountDays), 0);
        assert_eq!(store.calls(StoreOp::SetPlanActive), 0);
    }

    #[tokio::test]
    async fn day_count_failure_is_reported_with_context() {
        let (svc, store) = service();
        store.fail_on(StoreOp::CountDays);

        let err = svc.can_activate_plan(Uuid::new_v4()).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to check training days"));
    }

    // -- list_plans --

    #[tokio::test]
    async fn second_page_of_fifteen_has_five_plans() {
        let (svc, store) = service();
        let owner = Uuid::new_v4();
        for _ in 0..15 {
            new_bare_plan(&store, owner).await;
        }
        // Another owner's plans never count.
        new_bare_plan(&store, Uuid::new_v4()).await;

        let page = svc.list_plans(owner, 2, 10).await.unwrap();
        assert_eq!(page.plans.len(), 5);
        assert_eq!(page.pagination.total, 15);
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.limit, 10);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let (svc, _) = service();
        let owner = Uuid::new_v4();
        let mut cmd = command();
        cmd.name = "First".to_string();
        svc.create_complete_plan(&cmd, owner).await.unwrap();
        cmd.name = "Second".to_string();
        svc.create_complete_plan(&cmd, owner).await.unwrap();

        let page = svc.list_plans(owner, 1, 10).await.unwrap();
        let names: Vec<&str> = page.plans.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn empty_list_has_zero_total() {
        let (svc, _) = service();
        let page = svc.list_plans(Uuid::new_v4(), 1, 10).await.unwrap();
        assert!(page.plans.is_empty());
        assert_eq!(page.pagination.total, 0);
    }

    #[tokio::test]
    async fn offset_overflow_is_rejected_without_querying() {
        let (svc, store) = service();
        assert_matches!(
            svc.list_plans(Uuid::new_v4(), u32::MAX, u32::MAX).await,
            Err(CoreError::Validation(msg)) if msg == "page is out of range"
        );
        assert_eq!(store.calls(StoreOp::ListPlans), 0);
    }

    #[tokio::test]
    async fn zero_page_is_rejected() {
        let (svc, _) = service();
        assert_matches!(
            svc.list_plans(Uuid::new_v4(), 0, 10).await,
            Err(CoreError::Validation(_))
        );
    }

    // -- get_details / delete_plan / ensure_owned --

    #[tokio::test]
    async fn details_of_missing_plan_is_not_found() {
        let (svc, _) = service();
        assert_matches!(
            svc.get_details(Uuid::new_v4()).await,
            Err(CoreError::NotFound { entity: "TrainingPlan", .. })
        );
    }

    #[tokio::test]
    async fn delete_removes_plan_and_its_rows() {
        let (svc, store) = service();
        let created = svc
            .create_complete_plan(&command(), Uuid::new_v4())
            .await
            .unwrap();

        svc.delete_plan(created.id).await.unwrap();
        assert_eq!(store.plan_count(), 0);
        assert_eq!(store.day_count(), 0);
        assert_eq!(store.link_count(), 0);
        // Exercises are referenced, not owned, and survive the delete.
        assert_eq!(store.exercise_count(), 4);
    }

    #[tokio::test]
    async fn deleting_missing_plan_is_not_found() {
        let (svc, _) = service();
        assert_matches!(
            svc.delete_plan(Uuid::new_v4()).await,
            Err(CoreError::NotFound { .. })
        );
    }

    #[tokio::test]
    async fn delete_store_failure_is_upstream_error() {
        let (svc, store) = service();
        store.fail_on(StoreOp::DeletePlan);
        assert_matches!(
            svc.delete_plan(Uuid::new_v4()).await,
            Err(CoreError::Upstream { context: "Failed to delete training plan", .. })
        );
    }

    #[tokio::test]
    async fn foreign_plan_is_reported_missing() {
        let (svc, store) = service();
        let owner = Uuid::new_v4();
        let plan_id = new_bare_plan(&store, owner).await;

        assert!(svc.ensure_owned(plan_id, owner).await.is_ok());
        assert_matches!(
            svc.ensure_owned(plan_id, Uuid::new_v4()).await,
            Err(CoreError::NotFound { .. })
        );
    }

    // -- today_workout --

    #[tokio::test]
    async fn today_workout_uses_active_plan_day() {
        let (svc, _) = service();
        let owner = Uuid::new_v4();
        let created = svc.create_complete_plan(&command(), owner).await.unwrap();
        svc.activate_plan(created.id).await.unwrap();

        let workout = svc.today_workout(owner, 1).await.unwrap();
        assert_eq!(workout.training_plan.id, created.id);
        assert_eq!(workout.training_day.weekday, 1);
        assert_eq!(workout.exercises.len(), 3);
        assert_eq!(workout.exercises[0].exercise.name, "Bench Press");
    }

    #[tokio::test]
    async fn today_workout_without_active_plan_is_not_scheduled() {
        let (svc, _) = service();
        let owner = Uuid::new_v4();
        svc.create_complete_plan(&command(), owner).await.unwrap();

        assert_matches!(
            svc.today_workout(owner, 1).await,
            Err(CoreError::NotScheduled(_))
        );
    }

    #[tokio::test]
    async fn today_workout_on_rest_day_is_not_scheduled() {
        let (svc, _) = service();
        let owner = Uuid::new_v4();
        let created = svc.create_complete_plan(&command(), owner).await.unwrap();
        svc.activate_plan(created.id).await.unwrap();

        assert_matches!(
            svc.today_workout(owner, 6).await,
            Err(CoreError::NotScheduled(_))
        );
    }

    #[tokio::test]
    async fn today_workout_rejects_invalid_weekday() {
        let (svc, _) = service();
        assert_matches!(
            svc.today_workout(Uuid::new_v4(), 9).await,
            Err(CoreError::Validation(_))
        );
    }
}
