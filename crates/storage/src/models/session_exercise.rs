use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// An exercise performed within a session, at position `exercise_number`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SessionExercise {
    pub session_exercise_id: Uuid,
    pub session_id: Uuid,
    pub exercise_id: Uuid,
    pub exercise_number: i32,
}

impl SessionExercise {
    pub fn new(session_id: Uuid, exercise_id: Uuid, exercise_number: i32) -> Self {
        Self {
            session_exercise_id: Uuid::new_v4(),
            session_id,
            exercise_id,
            exercise_number,
        }
    }
}
