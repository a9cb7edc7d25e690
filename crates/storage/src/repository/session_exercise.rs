use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::Repository;
use crate::error::{Result, StorageError};
use crate::models::SessionExercise;
use crate::result::{StoreOutcome, StoreResult};

#[derive(Debug, Clone)]
pub struct SessionExerciseRepository {
    pool: PgPool,
}

impl SessionExerciseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<SessionExercise> {
        let session_exercise = sqlx::query_as::<_, SessionExercise>(
            r#"
            SELECT session_exercise_id, session_id, exercise_id, exercise_number
            FROM session_exercises
            WHERE session_exercise_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(session_exercise)
    }

    pub async fn list_for_session(&self, session_id: Uuid) -> Result<Vec<SessionExercise>> {
        let session_exercises = sqlx::query_as::<_, SessionExercise>(
            r#"
            SELECT session_exercise_id, session_id, exercise_id, exercise_number
            FROM session_exercises
            WHERE session_id = $1
            ORDER BY exercise_number
            "#,
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(session_exercises)
    }

    pub async fn create(&self, session_exercise: &SessionExercise) -> Result<SessionExercise> {
        let session_exercise = sqlx::query_as::<_, SessionExercise>(
            r#"
            INSERT INTO session_exercises (session_exercise_id, session_id, exercise_id, exercise_number)
            VALUES ($1, $2, $3, $4)
            RETURNING session_exercise_id, session_id, exercise_id, exercise_number
            "#,
        )
        .bind(session_exercise.session_exercise_id)
        .bind(session_exercise.session_id)
        .bind(session_exercise.exercise_id)
        .bind(session_exercise.exercise_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(session_exercise)
    }

    pub async fn modify(&self, session_exercise: &SessionExercise) -> Result<SessionExercise> {
        let session_exercise = sqlx::query_as::<_, SessionExercise>(
            r#"
            UPDATE session_exercises
            SET exercise_id = $2,
                exercise_number = $3
            WHERE session_exercise_id = $1
            RETURNING session_exercise_id, session_id, exercise_id, exercise_number
            "#,
        )
        .bind(session_exercise.session_exercise_id)
        .bind(session_exercise.exercise_id)
        .bind(session_exercise.exercise_number)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(session_exercise)
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM session_exercises WHERE session_exercise_id = $1")
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
impl Repository<SessionExercise> for SessionExerciseRepository {
    async fn get_by_id(&self, id: Uuid) -> StoreResult<SessionExercise> {
        self.find_by_id(id).await.into()
    }

    async fn get_by_parent_id(&self, session_id: Uuid) -> StoreResult<Vec<SessionExercise>> {
        self.list_for_session(session_id).await.into()
    }

    async fn add(&self, session_exercise: &SessionExercise) -> StoreResult<SessionExercise> {
        self.create(session_exercise).await.into()
    }

    async fn update(&self, session_exercise: &SessionExercise) -> StoreResult<SessionExercise> {
        self.modify(session_exercise).await.into()
    }

    async fn delete(&self, id: Uuid) -> StoreOutcome {
        self.remove(id).await.into()
    }
}
