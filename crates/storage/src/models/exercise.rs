use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// Library rows with no owner are system defaults, visible to every user.

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MuscleCategory {
    pub muscle_category_id: Uuid,
    pub owner_user_id: Option<Uuid>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MuscleGroup {
    pub muscle_group_id: Uuid,
    pub muscle_category_id: Uuid,
    pub owner_user_id: Option<Uuid>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Exercise {
    pub exercise_id: Uuid,
    pub muscle_group_id: Option<Uuid>,
    pub owner_user_id: Option<Uuid>,
    pub name: String,
}

impl Exercise {
    pub fn new(owner_user_id: Uuid, muscle_group_id: Option<Uuid>, name: impl Into<String>) -> Self {
        Self {
            exercise_id: Uuid::new_v4(),
            muscle_group_id,
            owner_user_id: Some(owner_user_id),
            name: name.into(),
        }
    }
}

/// Whether a library row owned by `owner` is visible to `user_id`.
pub fn is_visible_to(owner: Option<Uuid>, user_id: Uuid) -> bool {
    owner.is_none_or(|owner| owner == user_id)
}

impl MuscleCategory {
    pub fn is_visible_to(&self, user_id: Uuid) -> bool {
        is_visible_to(self.owner_user_id, user_id)
    }
}

impl MuscleGroup {
    pub fn is_visible_to(&self, user_id: Uuid) -> bool {
        is_visible_to(self.owner_user_id, user_id)
    }
}

impl Exercise {
    pub fn is_visible_to(&self, user_id: Uuid) -> bool {
        is_visible_to(self.owner_user_id, user_id)
    }
}
