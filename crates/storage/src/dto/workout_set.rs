use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::WorkoutSet;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetResponse {
    pub set_id: Uuid,
    pub session_exercise_id: Uuid,
    pub set_number: i32,
    pub weight: Decimal,
    pub reps: i32,
    pub warm_up: bool,
}

/// Request payload for logging a set. `set_number` defaults to the next position.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSetRequest {
    #[validate(range(min = 1, message = "Set number must be positive"))]
    pub set_number: Option<i32>,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Decimal,

    #[validate(range(min = 0, max = 10000, message = "Reps must be between 0 and 10000"))]
    pub reps: i32,

    #[serde(default)]
    pub warm_up: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSetRequest {
    #[validate(range(min = 1, message = "Set number must be positive"))]
    pub set_number: Option<i32>,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Option<Decimal>,

    #[validate(range(min = 0, max = 10000, message = "Reps must be between 0 and 10000"))]
    pub reps: Option<i32>,

    pub warm_up: Option<bool>,
}

fn validate_weight(weight: &Decimal) -> Result<(), validator::ValidationError> {
    let max_weight = Decimal::new(99_999, 0);

    if weight.is_sign_negative() || *weight > max_weight {
        let mut error = validator::ValidationError::new("invalid_weight");
        error.message = Some("Weight must be between 0 and 99999".into());
        Err(error)
    } else {
        Ok(())
    }
}

impl From<WorkoutSet> for SetResponse {
    fn from(set: WorkoutSet) -> Self {
        Self {
            set_id: set.set_id,
            session_exercise_id: set.session_exercise_id,
            set_number: set.set_number,
            weight: set.weight,
            reps: set.reps,
            warm_up: set.warm_up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_weight_fails_validation() {
        let request = CreateSetRequest {
            set_number: None,
            weight: Decimal::new(-25, 1),
            reps: 5,
            warm_up: false,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("weight"));
    }

    #[test]
    fn partial_update_validates_only_present_fields() {
        let request = UpdateSetRequest {
            reps: Some(8),
            ..UpdateSetRequest::default()
        };
        assert!(request.validate().is_ok());

        let request = UpdateSetRequest {
            set_number: Some(0),
            ..UpdateSetRequest::default()
        };
        assert!(request.validate().is_err());
    }
}
