use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::AccountStore;
use crate::error::{Result, StorageError};
use crate::models::{User, Workout};
use crate::result::{StoreOutcome, StoreResult};
use crate::unit_of_work::{StagedEntity, UnitOfWork};

#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, email, password_hash, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    /// Insert every staged entity inside one transaction.
    ///
    /// Returning early drops `tx`, which rolls the whole batch back.
    pub async fn flush(&self, unit: UnitOfWork) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        for entity in unit.into_staged() {
            match entity {
                StagedEntity::User(user) => Self::insert_user(&user, &mut tx).await?,
                StagedEntity::Workout(workout) => Self::insert_workout(&workout, &mut tx).await?,
            }
        }

        tx.commit().await?;
        Ok(())
    }

    async fn insert_user(
        user: &User,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (user_id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.user_id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    async fn insert_workout(
        workout: &Workout,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO workouts (workout_id, owner_user_id, name, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(workout.workout_id)
        .bind(workout.owner_user_id)
        .bind(&workout.name)
        .bind(workout.created_at)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn get_user_by_id(&self, id: Uuid) -> StoreResult<User> {
        self.find_by_id(id).await.into()
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<User> {
        self.find_by_email(email).await.into()
    }

    async fn commit(&self, unit: UnitOfWork) -> StoreOutcome {
        let staged = unit.len();
        let outcome: StoreOutcome = self.flush(unit).await.into();
        if let StoreResult::Failure(failure) = &outcome {
            tracing::warn!(staged, %failure, "unit of work rolled back");
        }
        outcome
    }
}
