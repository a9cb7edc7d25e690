use chrono::Utc;
use storage::{
    Store,
    dto::session::{CreateSessionRequest, SessionResponse, UpdateSessionRequest},
    models::Session,
};
use uuid::Uuid;

use crate::{
    auth::CallerId,
    authz::{authorize_session, authorize_workout},
    error::WebResult,
};

/// List a workout's sessions, most recent first
pub async fn list_sessions(
    store: &dyn Store,
    caller: CallerId,
    workout_id: Uuid,
) -> WebResult<Vec<SessionResponse>> {
    let workout = authorize_workout(store, caller, workout_id).await?;
    let sessions = store
        .sessions()
        .get_by_parent_id(workout.workout_id)
        .await
        .into_result()?;

    Ok(sessions.into_iter().map(SessionResponse::from).collect())
}

pub async fn get_session(
    store: &dyn Store,
    caller: CallerId,
    session_id: Uuid,
) -> WebResult<SessionResponse> {
    let chain = authorize_session(store, caller, session_id).await?;
    Ok(chain.session.into())
}

pub async fn create_session(
    store: &dyn Store,
    caller: CallerId,
    workout_id: Uuid,
    req: &CreateSessionRequest,
) -> WebResult<SessionResponse> {
    let workout = authorize_workout(store, caller, workout_id).await?;
    let created_at = req.created_at.unwrap_or_else(|| Utc::now().naive_utc());

    let session = Session::new(workout.workout_id, created_at);
    let created = store.sessions().add(&session).await.into_result()?;

    tracing::info!(session_id = %created.session_id, %workout_id, "session created");
    Ok(created.into())
}

pub async fn update_session(
    store: &dyn Store,
    caller: CallerId,
    session_id: Uuid,
    req: &UpdateSessionRequest,
) -> WebResult<SessionResponse> {
    let chain = authorize_session(store, caller, session_id).await?;
    let rescheduled = Session {
        created_at: req.created_at,
        ..chain.session
    };

    let updated = store.sessions().update(&rescheduled).await.into_result()?;
    Ok(updated.into())
}

pub async fn delete_session(store: &dyn Store, caller: CallerId, session_id: Uuid) -> WebResult<()> {
    let chain = authorize_session(store, caller, session_id).await?;
    store
        .sessions()
        .delete(chain.session.session_id)
        .await
        .into_result()?;

    tracing::info!(%session_id, "session deleted");
    Ok(())
}
