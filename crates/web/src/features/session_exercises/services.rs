use storage::{
    Store,
    dto::session_exercise::{
        CreateSessionExerciseRequest, SessionExerciseResponse, UpdateSessionExerciseRequest,
    },
    models::SessionExercise,
};
use uuid::Uuid;

use crate::{
    auth::CallerId,
    authz::{authorize_session, authorize_session_exercise},
    error::WebResult,
    features::{exercises::services::visible_exercise, next_position},
};

/// List the exercises of a session in performing order
pub async fn list_session_exercises(
    store: &dyn Store,
    caller: CallerId,
    session_id: Uuid,
) -> WebResult<Vec<SessionExerciseResponse>> {
    let chain = authorize_session(store, caller, session_id).await?;
    let exercises = store
        .session_exercises()
        .get_by_parent_id(chain.session.session_id)
        .await
        .into_result()?;

    Ok(exercises
        .into_iter()
        .map(SessionExerciseResponse::from)
        .collect())
}

pub async fn get_session_exercise(
    store: &dyn Store,
    caller: CallerId,
    session_exercise_id: Uuid,
) -> WebResult<SessionExerciseResponse> {
    let chain = authorize_session_exercise(store, caller, session_exercise_id).await?;
    Ok(chain.session_exercise.into())
}

pub async fn create_session_exercise(
    store: &dyn Store,
    caller: CallerId,
    session_id: Uuid,
    req: &CreateSessionExerciseRequest,
) -> WebResult<SessionExerciseResponse> {
    let chain = authorize_session(store, caller, session_id).await?;
    let exercise = visible_exercise(store, caller, req.exercise_id).await?;

    let exercise_number = match req.exercise_number {
        Some(number) => number,
        None => {
            let siblings = store
                .session_exercises()
                .get_by_parent_id(chain.session.session_id)
                .await
                .into_result()?;
            next_position(siblings.iter().map(|se| se.exercise_number))
        }
    };

    let session_exercise =
        SessionExercise::new(chain.session.session_id, exercise.exercise_id, exercise_number);
    let created = store
        .session_exercises()
        .add(&session_exercise)
        .await
        .into_result()?;

    tracing::info!(
        session_exercise_id = %created.session_exercise_id,
        %session_id,
        exercise_number,
        "exercise added to session"
    );
    Ok(created.into())
}

pub async fn update_session_exercise(
    store: &dyn Store,
    caller: CallerId,
    session_exercise_id: Uuid,
    req: &UpdateSessionExerciseRequest,
) -> WebResult<SessionExerciseResponse> {
    let chain = authorize_session_exercise(store, caller, session_exercise_id).await?;
    let existing = chain.session_exercise;

    let exercise_id = match req.exercise_id {
        Some(exercise_id) => visible_exercise(store, caller, exercise_id).await?.exercise_id,
        None => existing.exercise_id,
    };

    let modified = SessionExercise {
        exercise_id,
        exercise_number: req.exercise_number.unwrap_or(existing.exercise_number),
        ..existing
    };

    let updated = store
        .session_exercises()
        .update(&modified)
        .await
        .into_result()?;
    Ok(updated.into())
}

/// Delete a session exercise and its sets
pub async fn delete_session_exercise(
    store: &dyn Store,
    caller: CallerId,
    session_exercise_id: Uuid,
) -> WebResult<()> {
    let chain = authorize_session_exercise(store, caller, session_exercise_id).await?;
    store
        .session_exercises()
        .delete(chain.session_exercise.session_exercise_id)
        .await
        .into_result()?;

    tracing::info!(%session_exercise_id, "session exercise deleted");
    Ok(())
}
