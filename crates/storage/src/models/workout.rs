use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Root of the ownership chain; `owner_user_id` never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Workout {
    pub workout_id: Uuid,
    pub owner_user_id: Uuid,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl Workout {
    pub fn new(owner_user_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            workout_id: Uuid::new_v4(),
            owner_user_id,
            name: name.into(),
            created_at: Utc::now().naive_utc(),
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_user_id == user_id
    }
}
