use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::Repository;
use crate::error::{Result, StorageError};
use crate::models::Workout;
use crate::result::{StoreOutcome, StoreResult};

#[derive(Debug, Clone)]
pub struct WorkoutRepository {
    pool: PgPool,
}

impl WorkoutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find workout by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            SELECT workout_id, owner_user_id, name, created_at
            FROM workouts
            WHERE workout_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    /// List the workouts owned by a user
    pub async fn list_for_owner(&self, owner_user_id: Uuid) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT workout_id, owner_user_id, name, created_at
            FROM workouts
            WHERE owner_user_id = $1
            ORDER BY created_at, name
            "#,
        )
        .bind(owner_user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(workouts)
    }

    pub async fn create(&self, workout: &Workout) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            INSERT INTO workouts (workout_id, owner_user_id, name, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING workout_id, owner_user_id, name, created_at
            "#,
        )
        .bind(workout.workout_id)
        .bind(workout.owner_user_id)
        .bind(&workout.name)
        .bind(workout.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(workout)
    }

    /// Rename a workout. The owner column is never written.
    pub async fn rename(&self, workout: &Workout) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            UPDATE workouts
            SET name = $2
            WHERE workout_id = $1
            RETURNING workout_id, owner_user_id, name, created_at
            "#,
        )
        .bind(workout.workout_id)
        .bind(&workout.name)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    /// Delete a workout and, by cascade, its sessions
    pub async fn remove(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM workouts WHERE workout_id = $1")
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
impl Repository<Workout> for WorkoutRepository {
    async fn get_by_id(&self, id: Uuid) -> StoreResult<Workout> {
        self.find_by_id(id).await.into()
    }

    async fn get_by_parent_id(&self, owner_user_id: Uuid) -> StoreResult<Vec<Workout>> {
        self.list_for_owner(owner_user_id).await.into()
    }

    async fn add(&self, workout: &Workout) -> StoreResult<Workout> {
        self.create(workout).await.into()
    }

    async fn update(&self, workout: &Workout) -> StoreResult<Workout> {
        self.rename(workout).await.into()
    }

    async fn delete(&self, id: Uuid) -> StoreOutcome {
        self.remove(id).await.into()
    }
}
