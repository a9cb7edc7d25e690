use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::Repository;
use crate::error::{Result, StorageError};
use crate::models::Session;
use crate::result::{StoreOutcome, StoreResult};

#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Session> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            SELECT session_id, workout_id, created_at
            FROM sessions
            WHERE session_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(session)
    }

    /// List sessions of a workout, most recent first
    pub async fn list_for_workout(&self, workout_id: Uuid) -> Result<Vec<Session>> {
        let sessions = sqlx::query_as::<_, Session>(
            r#"
            SELECT session_id, workout_id, created_at
            FROM sessions
            WHERE workout_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(workout_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sessions)
    }

    pub async fn create(&self, session: &Session) -> Result<Session> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (session_id, workout_id, created_at)
            VALUES ($1, $2, $3)
            RETURNING session_id, workout_id, created_at
            "#,
        )
        .bind(session.session_id)
        .bind(session.workout_id)
        .bind(session.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    pub async fn reschedule(&self, session: &Session) -> Result<Session> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            UPDATE sessions
            SET created_at = $2
            WHERE session_id = $1
            RETURNING session_id, workout_id, created_at
            "#,
        )
        .bind(session.session_id)
        .bind(session.created_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(session)
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM sessions WHERE session_id = $1")
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
impl Repository<Session> for SessionRepository {
    async fn get_by_id(&self, id: Uuid) -> StoreResult<Session> {
        self.find_by_id(id).await.into()
    }

    async fn get_by_parent_id(&self, workout_id: Uuid) -> StoreResult<Vec<Session>> {
        self.list_for_workout(workout_id).await.into()
    }

    async fn add(&self, session: &Session) -> StoreResult<Session> {
        self.create(session).await.into()
    }

    async fn update(&self, session: &Session) -> StoreResult<Session> {
        self.reschedule(session).await.into()
    }

    async fn delete(&self, id: Uuid) -> StoreOutcome {
        self.remove(id).await.into()
    }
}
