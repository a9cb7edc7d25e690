use storage::{
    Store,
    dto::workout::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutResponse},
    models::Workout,
};
use uuid::Uuid;

use crate::{auth::CallerId, authz::authorize_workout, error::WebResult};

/// List the caller's workouts, oldest first
pub async fn list_workouts(store: &dyn Store, caller: CallerId) -> WebResult<Vec<WorkoutResponse>> {
    let workouts = store.workouts().get_by_parent_id(caller.0).await.into_result()?;
    Ok(workouts.into_iter().map(WorkoutResponse::from).collect())
}

pub async fn get_workout(
    store: &dyn Store,
    caller: CallerId,
    workout_id: Uuid,
) -> WebResult<WorkoutResponse> {
    let workout = authorize_workout(store, caller, workout_id).await?;
    Ok(workout.into())
}

/// Create a workout owned by the caller
pub async fn create_workout(
    store: &dyn Store,
    caller: CallerId,
    req: &CreateWorkoutRequest,
) -> WebResult<WorkoutResponse> {
    let workout = Workout::new(caller.0, req.name.clone());
    let created = store.workouts().add(&workout).await.into_result()?;

    tracing::info!(workout_id = %created.workout_id, "workout created");
    Ok(created.into())
}

pub async fn rename_workout(
    store: &dyn Store,
    caller: CallerId,
    workout_id: Uuid,
    req: &UpdateWorkoutRequest,
) -> WebResult<WorkoutResponse> {
    let existing = authorize_workout(store, caller, workout_id).await?;
    let renamed = Workout {
        name: req.name.clone(),
        ..existing
    };

    let updated = store.workouts().update(&renamed).await.into_result()?;
    Ok(updated.into())
}

/// Delete a workout together with its sessions, exercises and sets
pub async fn delete_workout(store: &dyn Store, caller: CallerId, workout_id: Uuid) -> WebResult<()> {
    let workout = authorize_workout(store, caller, workout_id).await?;
    store.workouts().delete(workout.workout_id).await.into_result()?;

    tracing::info!(%workout_id, "workout deleted");
    Ok(())
}
