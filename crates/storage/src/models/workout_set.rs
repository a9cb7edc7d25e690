use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutSet {
    pub set_id: Uuid,
    pub session_exercise_id: Uuid,
    pub set_number: i32,
    pub weight: Decimal,
    pub reps: i32,
    pub warm_up: bool,
}

impl WorkoutSet {
    pub fn new(
        session_exercise_id: Uuid,
        set_number: i32,
        weight: Decimal,
        reps: i32,
        warm_up: bool,
    ) -> Self {
        Self {
            set_id: Uuid::new_v4(),
            session_exercise_id,
            set_number,
            weight,
            reps,
            warm_up,
        }
    }
}
