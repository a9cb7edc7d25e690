use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::ExerciseLibrary;
use crate::error::{Result, StorageError};
use crate::models::{Exercise, MuscleCategory, MuscleGroup};
use crate::result::StoreResult;

/// Exercises, muscle groups and muscle categories.
#[derive(Debug, Clone)]
pub struct LibraryRepository {
    pool: PgPool,
}

impl LibraryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_exercise(&self, id: Uuid) -> Result<Exercise> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT exercise_id, muscle_group_id, owner_user_id, name
            FROM exercises
            WHERE exercise_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(exercise)
    }

    /// System exercises plus the user's own
    pub async fn list_exercises(&self, user_id: Uuid) -> Result<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT exercise_id, muscle_group_id, owner_user_id, name
            FROM exercises
            WHERE owner_user_id IS NULL OR owner_user_id = $1
            ORDER BY name
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(exercises)
    }

    pub async fn create_exercise(&self, exercise: &Exercise) -> Result<Exercise> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (exercise_id, muscle_group_id, owner_user_id, name)
            VALUES ($1, $2, $3, $4)
            RETURNING exercise_id, muscle_group_id, owner_user_id, name
            "#,
        )
        .bind(exercise.exercise_id)
        .bind(exercise.muscle_group_id)
        .bind(exercise.owner_user_id)
        .bind(&exercise.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(exercise)
    }

    pub async fn find_muscle_group(&self, id: Uuid) -> Result<MuscleGroup> {
        let group = sqlx::query_as::<_, MuscleGroup>(
            r#"
            SELECT muscle_group_id, muscle_category_id, owner_user_id, name
            FROM muscle_groups
            WHERE muscle_group_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(group)
    }

    pub async fn list_muscle_groups(&self, user_id: Uuid) -> Result<Vec<MuscleGroup>> {
        let groups = sqlx::query_as::<_, MuscleGroup>(
            r#"
            SELECT muscle_group_id, muscle_category_id, owner_user_id, name
            FROM muscle_groups
            WHERE owner_user_id IS NULL OR owner_user_id = $1
            ORDER BY name
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(groups)
    }

    pub async fn list_muscle_categories(&self, user_id: Uuid) -> Result<Vec<MuscleCategory>> {
        let categories = sqlx::query_as::<_, MuscleCategory>(
            r#"
            SELECT muscle_category_id, owner_user_id, name
            FROM muscle_categories
            WHERE owner_user_id IS NULL OR owner_user_id = $1
            ORDER BY name
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }
}

#[async_trait]
impl ExerciseLibrary for LibraryRepository {
    async fn get_exercise(&self, id: Uuid) -> StoreResult<Exercise> {
        self.find_exercise(id).await.into()
    }

    async fn visible_exercises(&self, user_id: Uuid) -> StoreResult<Vec<Exercise>> {
        self.list_exercises(user_id).await.into()
    }

    async fn add_exercise(&self, exercise: &Exercise) -> StoreResult<Exercise> {
        self.create_exercise(exercise).await.into()
    }

    async fn get_muscle_group(&self, id: Uuid) -> StoreResult<MuscleGroup> {
        self.find_muscle_group(id).await.into()
    }

    async fn visible_muscle_groups(&self, user_id: Uuid) -> StoreResult<Vec<MuscleGroup>> {
        self.list_muscle_groups(user_id).await.into()
    }

    async fn visible_muscle_categories(&self, user_id: Uuid) -> StoreResult<Vec<MuscleCategory>> {
        self.list_muscle_categories(user_id).await.into()
    }
}
