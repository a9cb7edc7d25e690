use axum::extract::State;
use storage::dto::session::{CreateSessionRequest, SessionResponse, UpdateSessionRequest};

use crate::{
    auth::CallerId,
    error::WebResult,
    extract::{ResourceId, ValidatedJson},
    http::{ApiReply, resource_path},
    response::ApiResponse,
    state::AppState,
};

use super::services;

#[utoipa::path(
    get,
    path = "/api/workouts/{id}/sessions",
    params(
        ("id" = Uuid, Path, description = "Workout id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Sessions of the workout", body = ApiResponse<Vec<SessionResponse>>),
        (status = 404, description = "Workout not found")
    ),
    tag = "sessions"
)]
pub async fn list_sessions(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(workout_id): ResourceId,
) -> WebResult<ApiReply<Vec<SessionResponse>>> {
    let sessions = services::list_sessions(state.store(), caller, workout_id).await?;

    Ok(ApiReply::ok(sessions))
}

#[utoipa::path(
    post,
    path = "/api/workouts/{id}/sessions",
    params(
        ("id" = Uuid, Path, description = "Workout id")
    ),
    request_body = CreateSessionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Session created successfully", body = ApiResponse<SessionResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Workout not found")
    ),
    tag = "sessions"
)]
pub async fn create_session(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(workout_id): ResourceId,
    ValidatedJson(req): ValidatedJson<CreateSessionRequest>,
) -> WebResult<ApiReply<SessionResponse>> {
    let session = services::create_session(state.store(), caller, workout_id, &req).await?;
    let location = resource_path("sessions", session.session_id);

    Ok(ApiReply::created(session, location))
}

#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Session found", body = ApiResponse<SessionResponse>),
        (status = 404, description = "Session not found")
    ),
    tag = "sessions"
)]
pub async fn get_session(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(id): ResourceId,
) -> WebResult<ApiReply<SessionResponse>> {
    let session = services::get_session(state.store(), caller, id).await?;

    Ok(ApiReply::ok(session))
}

#[utoipa::path(
    put,
    path = "/api/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    request_body = UpdateSessionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Session updated successfully", body = ApiResponse<SessionResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Session not found")
    ),
    tag = "sessions"
)]
pub async fn update_session(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(id): ResourceId,
    ValidatedJson(req): ValidatedJson<UpdateSessionRequest>,
) -> WebResult<ApiReply<SessionResponse>> {
    let session = services::update_session(state.store(), caller, id, &req).await?;

    Ok(ApiReply::ok(session))
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Session and its exercises deleted"),
        (status = 404, description = "Session not found")
    ),
    tag = "sessions"
)]
pub async fn delete_session(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(id): ResourceId,
) -> WebResult<ApiReply<()>> {
    services::delete_session(state.store(), caller, id).await?;

    Ok(ApiReply::ok(()))
}
