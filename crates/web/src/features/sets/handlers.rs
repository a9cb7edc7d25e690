use axum::extract::State;
use storage::dto::workout_set::{CreateSetRequest, SetResponse, UpdateSetRequest};

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
    path = "/api/session-exercises/{id}/sets",
    params(
        ("id" = Uuid, Path, description = "Session exercise id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Sets of the session exercise", body = ApiResponse<Vec<SetResponse>>),
        (status = 404, description = "Session exercise not found")
    ),
    tag = "sets"
)]
pub async fn list_sets(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(session_exercise_id): ResourceId,
) -> WebResult<ApiReply<Vec<SetResponse>>> {
    let sets = services::list_sets(state.store(), caller, session_exercise_id).await?;

    Ok(ApiReply::ok(sets))
}

#[utoipa::path(
    post,
    path = "/api/session-exercises/{id}/sets",
    params(
        ("id" = Uuid, Path, description = "Session exercise id")
    ),
    request_body = CreateSetRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Set logged", body = ApiResponse<SetResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Session exercise not found")
    ),
    tag = "sets"
)]
pub async fn create_set(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(session_exercise_id): ResourceId,
    ValidatedJson(req): ValidatedJson<CreateSetRequest>,
) -> WebResult<ApiReply<SetResponse>> {
    let set = services::create_set(state.store(), caller, session_exercise_id, &req).await?;
    let location = resource_path("sets", set.set_id);

    Ok(ApiReply::created(set, location))
}

#[utoipa::path(
    get,
    path = "/api/sets/{id}",
    params(
        ("id" = Uuid, Path, description = "Set id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Set found", body = ApiResponse<SetResponse>),
        (status = 404, description = "Set not found")
    ),
    tag = "sets"
)]
pub async fn get_set(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(id): ResourceId,
) -> WebResult<ApiReply<SetResponse>> {
    let set = services::get_set(state.store(), caller, id).await?;

    Ok(ApiReply::ok(set))
}

#[utoipa::path(
    put,
    path = "/api/sets/{id}",
    params(
        ("id" = Uuid, Path, description = "Set id")
    ),
    request_body = UpdateSetRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Set updated", body = ApiResponse<SetResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Set not found")
    ),
    tag = "sets"
)]
pub async fn update_set(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(id): ResourceId,
    ValidatedJson(req): ValidatedJson<UpdateSetRequest>,
) -> WebResult<ApiReply<SetResponse>> {
    let set = services::update_set(state.store(), caller, id, &req).await?;

    Ok(ApiReply::ok(set))
}

#[utoipa::path(
    delete,
    path = "/api/sets/{id}",
    params(
        ("id" = Uuid, Path, description = "Set id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Set deleted"),
        (status = 404, description = "Set not found")
    ),
    tag = "sets"
)]
pub async fn delete_set(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(id): ResourceId,
) -> WebResult<ApiReply<()>> {
    services::delete_set(state.store(), caller, id).await?;

    Ok(ApiReply::ok(()))
}
