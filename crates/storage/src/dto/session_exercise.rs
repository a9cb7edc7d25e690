use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::SessionExercise;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionExerciseResponse {
    pub session_exercise_id: Uuid,
    pub session_id: Uuid,
    pub exercise_id: Uuid,
    pub exercise_number: i32,
}

/// Request payload for adding an exercise to a session.
///
/// When `exercise_number` is omitted the exercise is appended after the
/// current last position.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSessionExerciseRequest {
    pub exercise_id: Uuid,

    #[validate(range(min = 1, message = "Exercise number must be positive"))]
    pub exercise_number: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSessionExerciseRequest {
    pub exercise_id: Option<Uuid>,

    #[validate(range(min = 1, message = "Exercise number must be positive"))]
    pub exercise_number: Option<i32>,
}

impl From<SessionExercise> for SessionExerciseResponse {
    fn from(se: SessionExercise) -> Self {
        Self {
            session_exercise_id: se.session_exercise_id,
            session_id: se.session_id,
            exercise_id: se.exercise_id,
            exercise_number: se.exercise_number,
        }
    }
}
