//! Training day entity model.

use gymplan_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `training_days` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrainingDay {
    pub id: DbId,
    pub plan_id: DbId,
    /// 0 (Sunday) through 6 (Saturday).
    pub weekday: i16,
    pub created_at: Timestamp,
}
