//! Training plan entity model and DTOs.

use gymplan_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `training_plans` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrainingPlan {
    pub id: DbId,
    /// Owner id issued by the auth provider.
    pub user_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    /// `manual` or `pdf_import`; enforced by `ck_training_plans_source`.
    pub source: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new training plan row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrainingPlan {
    pub user_id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `false` if omitted.
    pub is_active: Option<bool>,
    /// Defaults to `manual` if omitted.
    pub source: Option<String>,
}
