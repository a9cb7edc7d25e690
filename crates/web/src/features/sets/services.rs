use storage::{
    Store,
    dto::workout_set::{CreateSetRequest, SetResponse, UpdateSetRequest},
    models::WorkoutSet,
};
use uuid::Uuid;

use crate::{
    auth::CallerId,
    authz::{authorize_session_exercise, authorize_set},
    error::WebResult,
    features::next_position,
};

/// List the sets of a session exercise by set number
pub async fn list_sets(
    store: &dyn Store,
    caller: CallerId,
    session_exercise_id: Uuid,
) -> WebResult<Vec<SetResponse>> {
    let chain = authorize_session_exercise(store, caller, session_exercise_id).await?;
    let sets = store
        .sets()
        .get_by_parent_id(chain.session_exercise.session_exercise_id)
        .await
        .into_result()?;

    Ok(sets.into_iter().map(SetResponse::from).collect())
}

pub async fn get_set(store: &dyn Store, caller: CallerId, set_id: Uuid) -> WebResult<SetResponse> {
    let chain = authorize_set(store, caller, set_id).await?;
    Ok(chain.set.into())
}

pub async fn create_set(
    store: &dyn Store,
    caller: CallerId,
    session_exercise_id: Uuid,
    req: &CreateSetRequest,
) -> WebResult<SetResponse> {
    let chain = authorize_session_exercise(store, caller, session_exercise_id).await?;
    let parent_id = chain.session_exercise.session_exercise_id;

    let set_number = match req.set_number {
        Some(number) => number,
        None => {
            let siblings = store.sets().get_by_parent_id(parent_id).await.into_result()?;
            next_position(siblings.iter().map(|set| set.set_number))
        }
    };

    let set = WorkoutSet::new(parent_id, set_number, req.weight, req.reps, req.warm_up);
    let created = store.sets().add(&set).await.into_result()?;

    tracing::info!(set_id = %created.set_id, %session_exercise_id, set_number, "set logged");
    Ok(created.into())
}

pub async fn update_set(
    store: &dyn Store,
    caller: CallerId,
    set_id: Uuid,
    req: &UpdateSetRequest,
) -> WebResult<SetResponse> {
    let existing = authorize_set(store, caller, set_id).await?.set;

    let modified = WorkoutSet {
        set_number: req.set_number.unwrap_or(existing.set_number),
        weight: req.weight.unwrap_or(existing.weight),
        reps: req.reps.unwrap_or(existing.reps),
        warm_up: req.warm_up.unwrap_or(existing.warm_up),
        ..existing
    };

    let updated = store.sets().update(&modified).await.into_result()?;
    Ok(updated.into())
}

pub async fn delete_set(store: &dyn Store, caller: CallerId, set_id: Uuid) -> WebResult<()> {
    let chain = authorize_set(store, caller, set_id).await?;
    store.sets().delete(chain.set.set_id).await.into_result()?;

    tracing::info!(%set_id, "set deleted");
    Ok(())
}
