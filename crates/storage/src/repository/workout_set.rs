use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::Repository;
use crate::error::{Result, StorageError};
use crate::models::WorkoutSet;
use crate::result::{StoreOutcome, StoreResult};

#[derive(Debug, Clone)]
pub struct WorkoutSetRepository {
    pool: PgPool,
}

impl WorkoutSetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<WorkoutSet> {
        let set = sqlx::query_as::<_, WorkoutSet>(
            r#"
            SELECT set_id, session_exercise_id, set_number, weight, reps, warm_up
            FROM sets
            WHERE set_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(set)
    }

    pub async fn list_for_session_exercise(
        &self,
        session_exercise_id: Uuid,
    ) -> Result<Vec<WorkoutSet>> {
        let sets = sqlx::query_as::<_, WorkoutSet>(
            r#"
            SELECT set_id, session_exercise_id, set_number, weight, reps, warm_up
            FROM sets
            WHERE session_exercise_id = $1
            ORDER BY set_number
            "#,
        )
        .bind(session_exercise_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sets)
    }

    pub async fn create(&self, set: &WorkoutSet) -> Result<WorkoutSet> {
        let set = sqlx::query_as::<_, WorkoutSet>(
            r#"
            INSERT INTO sets (set_id, session_exercise_id, set_number, weight, reps, warm_up)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING set_id, session_exercise_id, set_number, weight, reps, warm_up
            "#,
        )
        .bind(set.set_id)
        .bind(set.session_exercise_id)
        .bind(set.set_number)
        .bind(set.weight)
        .bind(set.reps)
        .bind(set.warm_up)
        .fetch_one(&self.pool)
        .await?;

        Ok(set)
    }

    pub async fn modify(&self, set: &WorkoutSet) -> Result<WorkoutSet> {
        let set = sqlx::query_as::<_, WorkoutSet>(
            r#"
            UPDATE sets
            SET set_number = $2,
                weight = $3,
                reps = $4,
                warm_up = $5
            WHERE set_id = $1
            RETURNING set_id, session_exercise_id, set_number, weight, reps, warm_up
            "#,
        )
        .bind(set.set_id)
        .bind(set.set_number)
        .bind(set.weight)
        .bind(set.reps)
        .bind(set.warm_up)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(set)
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM sets WHERE set_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl Repository<WorkoutSet> for WorkoutSetRepository {
    async fn get_by_id(&self, id: Uuid) -> StoreResult<WorkoutSet> {
        self.find_by_id(id).await.into()
    }

    async fn get_by_parent_id(&self, session_exercise_id: Uuid) -> StoreResult<Vec<WorkoutSet>> {
        self.list_for_session_exercise(session_exercise_id)
            .await
            .into()
    }

    async fn add(&self, set: &WorkoutSet) -> StoreResult<WorkoutSet> {
        self.create(set).await.into()
    }

    async fn update(&self, set: &WorkoutSet) -> StoreResult<WorkoutSet> {
        self.modify(set).await.into()
    }

    async fn delete(&self, id: Uuid) -> StoreOutcome {
        self.remove(id).await.into()
    }
}
