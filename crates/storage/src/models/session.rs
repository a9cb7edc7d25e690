use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Session {
    pub session_id: Uuid,
    pub workout_id: Uuid,
    pub created_at: NaiveDateTime,
}

impl Session {
    pub fn new(workout_id: Uuid, created_at: NaiveDateTime) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            workout_id,
            created_at,
        }
    }
}
