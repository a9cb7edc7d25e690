use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Exercise, MuscleCategory, MuscleGroup};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResponse {
    pub exercise_id: Uuid,
    pub muscle_group_id: Option<Uuid>,
    pub name: String,
    /// `true` for the caller's own exercises, `false` for system defaults
    pub is_custom: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MuscleGroupResponse {
    pub muscle_group_id: Uuid,
    pub muscle_category_id: Uuid,
    pub name: String,
    pub is_custom: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MuscleCategoryResponse {
    pub muscle_category_id: Uuid,
    pub name: String,
    pub is_custom: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name must be between 1 and 100 characters"
    ))]
    pub name: String,

    pub muscle_group_id: Option<Uuid>,
}

impl From<Exercise> for ExerciseResponse {
    fn from(exercise: Exercise) -> Self {
        Self {
            exercise_id: exercise.exercise_id,
            muscle_group_id: exercise.muscle_group_id,
            name: exercise.name,
            is_custom: exercise.owner_user_id.is_some(),
        }
    }
}

impl From<MuscleGroup> for MuscleGroupResponse {
    fn from(group: MuscleGroup) -> Self {
        Self {
            muscle_group_id: group.muscle_group_id,
            muscle_category_id: group.muscle_category_id,
            name: group.name,
            is_custom: group.owner_user_id.is_some(),
        }
    }
}

impl From<MuscleCategory> for MuscleCategoryResponse {
    fn from(category: MuscleCategory) -> Self {
        Self {
            muscle_category_id: category.muscle_category_id,
            name: category.name,
            is_custom: category.owner_user_id.is_some(),
        }
    }
}
