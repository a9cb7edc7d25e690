//! Ownership-chain authorization.
//!
//! A nested resource is accessible only when walking its parent references
//! ends at a workout owned by the caller. Missing targets, missing ancestors
//! and foreign ownership all fail with the same `NotFound`, so a caller cannot
//! tell "does not exist" apart from "belongs to someone else".

use storage::{
    Store, StoreResult,
    models::{Session, SessionExercise, Workout, WorkoutSet},
};
use uuid::Uuid;

use crate::{auth::CallerId, error::WebError};

#[derive(Debug, Clone)]
pub struct SessionChain {
    pub workout: Workout,
    pub session: Session,
}

#[derive(Debug, Clone)]
pub struct SessionExerciseChain {
    pub workout: Workout,
    pub session: Session,
    pub session_exercise: SessionExercise,
}

#[derive(Debug, Clone)]
pub struct SetChain {
    pub workout: Workout,
    pub session: Session,
    pub session_exercise: SessionExercise,
    pub set: WorkoutSet,
}

// Storage-engine failures keep their own mapping; everything else is NotFound.
fn fetched<T>(result: StoreResult<T>) -> Result<T, WebError> {
    result.into_result().map_err(WebError::from)
}

pub async fn authorize_workout(
    store: &dyn Store,
    caller: CallerId,
    workout_id: Uuid,
) -> Result<Workout, WebError> {
    let workout = fetched(store.workouts().get_by_id(workout_id).await)?;

    if !workout.is_owned_by(caller.0) {
        tracing::debug!(%workout_id, "workout owned by another user");
        return Err(WebError::not_found());
    }

    Ok(workout)
}

pub async fn authorize_session(
    store: &dyn Store,
    caller: CallerId,
    session_id: Uuid,
) -> Result<SessionChain, WebError> {
    let session = fetched(store.sessions().get_by_id(session_id).await)?;
    let workout = authorize_workout(store, caller, session.workout_id).await?;

    Ok(SessionChain { workout, session })
}

pub async fn authorize_session_exercise(
    store: &dyn Store,
    caller: CallerId,
    session_exercise_id: Uuid,
) -> Result<SessionExerciseChain, WebError> {
    let session_exercise =
        fetched(store.session_exercises().get_by_id(session_exercise_id).await)?;
    let SessionChain { workout, session } =
        authorize_session(store, caller, session_exercise.session_id).await?;

    Ok(SessionExerciseChain {
        workout,
        session,
        session_exercise,
    })
}

pub async fn authorize_set(
    store: &dyn Store,
    caller: CallerId,
    set_id: Uuid,
) -> Result<SetChain, WebError> {
    let set = fetched(store.sets().get_by_id(set_id).await)?;
    let SessionExerciseChain {
        workout,
        session,
        session_exercise,
    } = authorize_session_exercise(store, caller, set.session_exercise_id).await?;

    Ok(SetChain {
        workout,
        session,
        session_exercise,
        set,
    })
}
