use storage::{
    Store,
    dto::exercise::{
        CreateExerciseRequest, ExerciseResponse, MuscleCategoryResponse, MuscleGroupResponse,
    },
    models::{Exercise, MuscleGroup},
};
use uuid::Uuid;

use crate::{
    auth::CallerId,
    error::{WebError, WebResult},
};

/// Exercise that is a system default or one of the caller's own.
pub async fn visible_exercise(
    store: &dyn Store,
    caller: CallerId,
    exercise_id: Uuid,
) -> WebResult<Exercise> {
    let exercise = store.library().get_exercise(exercise_id).await.into_result()?;

    if !exercise.is_visible_to(caller.0) {
        return Err(WebError::not_found());
    }

    Ok(exercise)
}

async fn visible_muscle_group(
    store: &dyn Store,
    caller: CallerId,
    muscle_group_id: Uuid,
) -> WebResult<MuscleGroup> {
    let group = store
        .library()
        .get_muscle_group(muscle_group_id)
        .await
        .into_result()?;

    if !group.is_visible_to(caller.0) {
        return Err(WebError::not_found());
    }

    Ok(group)
}

pub async fn list_exercises(store: &dyn Store, caller: CallerId) -> WebResult<Vec<ExerciseResponse>> {
    let exercises = store
        .library()
        .visible_exercises(caller.0)
        .await
        .into_result()?;

    Ok(exercises.into_iter().map(ExerciseResponse::from).collect())
}

pub async fn get_exercise(
    store: &dyn Store,
    caller: CallerId,
    exercise_id: Uuid,
) -> WebResult<ExerciseResponse> {
    visible_exercise(store, caller, exercise_id).await.map(Into::into)
}

/// Add a custom exercise owned by the caller
pub async fn create_exercise(
    store: &dyn Store,
    caller: CallerId,
    req: &CreateExerciseRequest,
) -> WebResult<ExerciseResponse> {
    if let Some(group_id) = req.muscle_group_id {
        visible_muscle_group(store, caller, group_id).await?;
    }

    let exercise = Exercise::new(caller.0, req.muscle_group_id, req.name.clone());
    let created = store.library().add_exercise(&exercise).await.into_result()?;

    tracing::info!(exercise_id = %created.exercise_id, "custom exercise created");
    Ok(created.into())
}

pub async fn list_muscle_groups(
    store: &dyn Store,
    caller: CallerId,
) -> WebResult<Vec<MuscleGroupResponse>> {
    let groups = store
        .library()
        .visible_muscle_groups(caller.0)
        .await
        .into_result()?;

    Ok(groups.into_iter().map(MuscleGroupResponse::from).collect())
}

pub async fn list_muscle_categories(
    store: &dyn Store,
    caller: CallerId,
) -> WebResult<Vec<MuscleCategoryResponse>> {
    let categories = store
        .library()
        .visible_muscle_categories(caller.0)
        .await
        .into_result()?;

    Ok(categories.into_iter().map(MuscleCategoryResponse::from).collect())
}
