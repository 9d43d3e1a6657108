//! In-memory [`PlanStore`] for tests.
//!
//! Mirrors the relational store closely enough for service and HTTP tests:
//! plan deletes cascade to days and links, lists are ordered the same way,
//! and any operation can be made to fail on demand via [`MemoryPlanStore::fail_on`]
//! or [`MemoryPlanStore::fail_after`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::store::{
    DayExerciseRecord, DayRecord, NewDayExercise, NewPlan, PlanRecord, PlanStore, StoreError,
    StoreResult,
};
use crate::types::DbId;

/// Store operations that can be counted and made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    Ping,
    InsertPlan,
    InsertDay,
    InsertExercise,
    InsertDayExercise,
    DeletePlan,
    FindPlan,
    CountPlans,
    ListPlans,
    SetPlanActive,
    FindLatestActivePlan,
    CountDays,
    CountPlanExercises,
    ListDays,
    FindDayByWeekday,
    ListDayExercises,
}

struct StoredPlan {
    seq: u64,
    record: PlanRecord,
}

struct StoredLink {
    id: DbId,
    link: NewDayExercise,
}

#[derive(Default)]
struct Tables {
    next_seq: u64,
    plans: Vec<StoredPlan>,
    days: Vec<DayRecord>,
    exercises: HashMap<DbId, String>,
    links: Vec<StoredLink>,
}

/// Thread-safe in-memory plan store with fault injection.
#[derive(Default)]
pub struct MemoryPlanStore {
    tables: Mutex<Tables>,
    /// Remaining successful calls before an operation starts failing.
    faults: Mutex<HashMap<StoreOp, usize>>,
    calls: Mutex<HashMap<StoreOp, usize>>,
}

impl MemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call to `op` fail.
    pub fn fail_on(&self, op: StoreOp) {
        self.fail_after(op, 0);
    }

    /// Let `op` succeed `successes` more times, then fail.
    pub fn fail_after(&self, op: StoreOp, successes: usize) {
        lock(&self.faults).insert(op, successes);
    }

    /// Number of times `op` was invoked, including failed calls.
    pub fn calls(&self, op: StoreOp) -> usize {
        lock(&self.calls).get(&op).copied().unwrap_or(0)
    }

    pub fn plan_count(&self) -> usize {
        lock(&self.tables).plans.len()
    }

    pub fn day_count(&self) -> usize {
        lock(&self.tables).days.len()
    }

    pub fn exercise_count(&self) -> usize {
        lock(&self.tables).exercises.len()
    }

    pub fn link_count(&self) -> usize {
        lock(&self.tables).links.len()
    }

    fn enter(&self, op: StoreOp) -> StoreResult<MutexGuard<'_, Tables>> {
        *lock(&self.calls).entry(op).or_insert(0) += 1;

        if let Some(remaining) = lock(&self.faults).get_mut(&op) {
            if *remaining == 0 {
                return Err(StoreError::new(format!("injected failure in {op:?}")));
            }
            *remaining -= 1;
        }
        Ok(lock(&self.tables))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Tables {
    fn link_record(&self, stored: &StoredLink) -> DayExerciseRecord {
        DayExerciseRecord {
            id: stored.id,
            day_id: stored.link.day_id,
            exercise_id: stored.link.exercise_id,
            exercise_name: self
                .exercises
                .get(&stored.link.exercise_id)
                .cloned()
                .unwrap_or_default(),
            order_index: stored.link.order_index,
            sets: stored.link.sets,
            repetitions: stored.link.repetitions,
            rest_time_seconds: stored.link.rest_time_seconds,
        }
    }

    fn owner_plans_newest_first(&self, owner_id: DbId) -> Vec<&StoredPlan> {
        let mut plans: Vec<&StoredPlan> = self
            .plans
            .iter()
            .filter(|p| p.record.owner_id == owner_id)
            .collect();
        plans.sort_by(|a, b| b.seq.cmp(&a.seq));
        plans
    }
}

#[async_trait]
impl PlanStore for MemoryPlanStore {
    async fn ping(&self) -> StoreResult<()> {
        self.enter(StoreOp::Ping).map(|_| ())
    }

    async fn insert_plan(&self, plan: &NewPlan) -> StoreResult<DbId> {
        let mut tables = self.enter(StoreOp::InsertPlan)?;
        let id = Uuid::new_v4();
        tables.next_seq += 1;
        let seq = tables.next_seq;
        tables.plans.push(StoredPlan {
            seq,
            record: PlanRecord {
                id,
                owner_id: plan.owner_id,
                name: plan.name.clone(),
                description: plan.description.clone(),
                is_active: plan.is_active,
                source: plan.source,
                created_at: Utc::now(),
            },
        });
        Ok(id)
    }

    async fn insert_day(&self, plan_id: DbId, weekday: i16) -> StoreResult<DbId> {
        let mut tables = self.enter(StoreOp::InsertDay)?;
        if !tables.plans.iter().any(|p| p.record.id == plan_id) {
            return Err(StoreError::new(
                "insert or update on table \"training_days\" violates foreign key constraint",
            ));
        }
        let id = Uuid::new_v4();
        tables.days.push(DayRecord {
            id,
            plan_id,
            weekday,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn insert_exercise(&self, name: &str) -> StoreResult<DbId> {
        let mut tables = self.enter(StoreOp::InsertExercise)?;
        let id = Uuid::new_v4();
        tables.exercises.insert(id, name.to_string());
        Ok(id)
    }

    async fn insert_day_exercise(&self, link: &NewDayExercise) -> StoreResult<DbId> {
        let mut tables = self.enter(StoreOp::InsertDayExercise)?;
        if !tables.days.iter().any(|d| d.id == link.day_id)
            || !tables.exercises.contains_key(&link.exercise_id)
        {
            return Err(StoreError::new(
                "insert or update on table \"training_day_exercises\" violates foreign key constraint",
            ));
        }
        let id = Uuid::new_v4();
        tables.links.push(StoredLink {
            id,
            link: link.clone(),
        });
        Ok(id)
    }

    async fn delete_plan(&self, plan_id: DbId) -> StoreResult<bool> {
        let mut tables = self.enter(StoreOp::DeletePlan)?;
        let before = tables.plans.len();
        tables.plans.retain(|p| p.record.id != plan_id);
        if tables.plans.len() == before {
            return Ok(false);
        }

        let day_ids: Vec<DbId> = tables
            .days
            .iter()
            .filter(|d| d.plan_id == plan_id)
            .map(|d| d.id)
            .collect();
        tables.days.retain(|d| d.plan_id != plan_id);
        tables.links.retain(|l| !day_ids.contains(&l.link.day_id));
        Ok(true)
    }

    async fn find_plan(&self, plan_id: DbId) -> StoreResult<Option<PlanRecord>> {
        let tables = self.enter(StoreOp::FindPlan)?;
        Ok(tables
            .plans
            .iter()
            .find(|p| p.record.id == plan_id)
            .map(|p| p.record.clone()))
    }

    async fn count_plans(&self, owner_id: DbId) -> StoreResult<i64> {
        let tables = self.enter(StoreOp::CountPlans)?;
        Ok(tables
            .plans
            .iter()
            .filter(|p| p.record.owner_id == owner_id)
            .count() as i64)
    }

    async fn list_plans(
        &self,
        owner_id: DbId,
        offset: i64,
        limit: i64,
    ) -> StoreResult<Vec<PlanRecord>> {
        let tables = self.enter(StoreOp::ListPlans)?;
        Ok(tables
            .owner_plans_newest_first(owner_id)
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|p| p.record.clone())
            .collect())
    }

    async fn set_plan_active(&self, plan_id: DbId, is_active: bool) -> StoreResult<bool> {
        let mut tables = self.enter(StoreOp::SetPlanActive)?;
        match tables.plans.iter_mut().find(|p| p.record.id == plan_id) {
            Some(plan) => {
                plan.record.is_active = is_active;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_latest_active_plan(&self, owner_id: DbId) -> StoreResult<Option<PlanRecord>> {
        let tables = self.enter(StoreOp::FindLatestActivePlan)?;
        Ok(tables
            .owner_plans_newest_first(owner_id)
            .into_iter()
            .find(|p| p.record.is_active)
            .map(|p| p.record.clone()))
    }

    async fn count_days(&self, plan_id: DbId) -> StoreResult<i64> {
        let tables = self.enter(StoreOp::CountDays)?;
        Ok(tables.days.iter().filter(|d| d.plan_id == plan_id).count() as i64)
    }

    async fn count_plan_exercises(&self, plan_id: DbId) -> StoreResult<i64> {
        let tables = self.enter(StoreOp::CountPlanExercises)?;
        let day_ids: Vec<DbId> = tables
            .days
            .iter()
            .filter(|d| d.plan_id == plan_id)
            .map(|d| d.id)
            .collect();
        Ok(tables
            .links
            .iter()
            .filter(|l| day_ids.contains(&l.link.day_id))
            .count() as i64)
    }

    async fn list_days(&self, plan_id: DbId) -> StoreResult<Vec<DayRecord>> {
        let tables = self.enter(StoreOp::ListDays)?;
        let mut days: Vec<DayRecord> = tables
            .days
            .iter()
            .filter(|d| d.plan_id == plan_id)
            .cloned()
            .collect();
        days.sort_by_key(|d| d.weekday);
        Ok(days)
    }

    async fn find_day_by_weekday(
        &self,
        plan_id: DbId,
        weekday: i16,
    ) -> StoreResult<Option<DayRecord>> {
        let tables = self.enter(StoreOp::FindDayByWeekday)?;
        Ok(tables
            .days
            .iter()
            .find(|d| d.plan_id == plan_id && d.weekday == weekday)
            .cloned())
    }

    async fn list_day_exercises(&self, day_id: DbId) -> StoreResult<Vec<DayExerciseRecord>> {
        let tables = self.enter(StoreOp::ListDayExercises)?;
        let mut links: Vec<DayExerciseRecord> = tables
            .links
            .iter()
            .filter(|l| l.link.day_id == day_id)
            .map(|l| tables.link_record(l))
            .collect();
        links.sort_by_key(|l| l.order_index);
        Ok(links)
    }
}
