//! Repository for the `exercises` table.

use gymplan_core::types::DbId;
use sqlx::PgPool;

use crate::models::exercise::Exercise;

const COLUMNS: &str = "id, name, created_at";

pub struct ExerciseRepo;

impl ExerciseRepo {
    /// Insert a new exercise row. Existing rows with the same name are not
    /// reused.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Exercise, sqlx::Error> {
        let query = format!("INSERT INTO exercises (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Exercise>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Exercise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exercises WHERE id = $1");
        sqlx::query_as::<_, Exercise>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
