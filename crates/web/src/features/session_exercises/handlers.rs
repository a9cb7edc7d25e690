use axum::extract::State;
use storage::dto::session_exercise::{
    CreateSessionExerciseRequest, SessionExerciseResponse, UpdateSessionExerciseRequest,
};

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
    path = "/api/sessions/{id}/exercises",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercises of the session", body = ApiResponse<Vec<SessionExerciseResponse>>),
        (status = 404, description = "Session not found")
    ),
    tag = "session-exercises"
)]
pub async fn list_session_exercises(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(session_id): ResourceId,
) -> WebResult<ApiReply<Vec<SessionExerciseResponse>>> {
    let exercises = services::list_session_exercises(state.store(), caller, session_id).await?;

    Ok(ApiReply::ok(exercises))
}

#[utoipa::path(
    post,
    path = "/api/sessions/{id}/exercises",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    request_body = CreateSessionExerciseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Exercise added to the session", body = ApiResponse<SessionExerciseResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Session or exercise not found")
    ),
    tag = "session-exercises"
)]
pub async fn create_session_exercise(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(session_id): ResourceId,
    ValidatedJson(req): ValidatedJson<CreateSessionExerciseRequest>,
) -> WebResult<ApiReply<SessionExerciseResponse>> {
    let created =
        services::create_session_exercise(state.store(), caller, session_id, &req).await?;
    let location = resource_path("session-exercises", created.session_exercise_id);

    Ok(ApiReply::created(created, location))
}

#[utoipa::path(
    get,
    path = "/api/session-exercises/{id}",
    params(
        ("id" = Uuid, Path, description = "Session exercise id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Session exercise found", body = ApiResponse<SessionExerciseResponse>),
        (status = 404, description = "Session exercise not found")
    ),
    tag = "session-exercises"
)]
pub async fn get_session_exercise(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(id): ResourceId,
) -> WebResult<ApiReply<SessionExerciseResponse>> {
    let session_exercise = services::get_session_exercise(state.store(), caller, id).await?;

    Ok(ApiReply::ok(session_exercise))
}

#[utoipa::path(
    put,
    path = "/api/session-exercises/{id}",
    params(
        ("id" = Uuid, Path, description = "Session exercise id")
    ),
    request_body = UpdateSessionExerciseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Session exercise updated", body = ApiResponse<SessionExerciseResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Session exercise or exercise not found")
    ),
    tag = "session-exercises"
)]
pub async fn update_session_exercise(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(id): ResourceId,
    ValidatedJson(req): ValidatedJson<UpdateSessionExerciseRequest>,
) -> WebResult<ApiReply<SessionExerciseResponse>> {
    let updated = services::update_session_exercise(state.store(), caller, id, &req).await?;

    Ok(ApiReply::ok(updated))
}

#[utoipa::path(
    delete,
    path = "/api/session-exercises/{id}",
    params(
        ("id" = Uuid, Path, description = "Session exercise id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Session exercise and its sets deleted"),
        (status = 404, description = "Session exercise not found")
    ),
    tag = "session-exercises"
)]
pub async fn delete_session_exercise(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(id): ResourceId,
) -> WebResult<ApiReply<()>> {
    services::delete_session_exercise(state.store(), caller, id).await?;

    Ok(ApiReply::ok(()))
}
