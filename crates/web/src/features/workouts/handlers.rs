use axum::extract::State;
use storage::dto::workout::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutResponse};

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
    path = "/api/workouts",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The caller's workouts", body = ApiResponse<Vec<WorkoutResponse>>),
        (status = 401, description = "Missing or invalid token")
    ),
    tag = "workouts"
)]
pub async fn list_workouts(
    State(state): State<AppState>,
    caller: CallerId,
) -> WebResult<ApiReply<Vec<WorkoutResponse>>> {
    let workouts = services::list_workouts(state.store(), caller).await?;

    Ok(ApiReply::ok(workouts))
}

#[utoipa::path(
    get,
    path = "/api/workouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Workout id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout found", body = ApiResponse<WorkoutResponse>),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn get_workout(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(id): ResourceId,
) -> WebResult<ApiReply<WorkoutResponse>> {
    let workout = services::get_workout(state.store(), caller, id).await?;

    Ok(ApiReply::ok(workout))
}

#[utoipa::path(
    post,
    path = "/api/workouts",
    request_body = CreateWorkoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Workout created successfully", body = ApiResponse<WorkoutResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Missing or invalid token"),
        (status = 409, description = "A workout with this name already exists")
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(state): State<AppState>,
    caller: CallerId,
    ValidatedJson(req): ValidatedJson<CreateWorkoutRequest>,
) -> WebResult<ApiReply<WorkoutResponse>> {
    let workout = services::create_workout(state.store(), caller, &req).await?;
    let location = resource_path("workouts", workout.workout_id);

    Ok(ApiReply::created(workout, location))
}

#[utoipa::path(
    put,
    path = "/api/workouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Workout id")
    ),
    request_body = UpdateWorkoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout renamed successfully", body = ApiResponse<WorkoutResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Workout not found"),
        (status = 409, description = "A workout with this name already exists")
    ),
    tag = "workouts"
)]
pub async fn update_workout(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(id): ResourceId,
    ValidatedJson(req): ValidatedJson<UpdateWorkoutRequest>,
) -> WebResult<ApiReply<WorkoutResponse>> {
    let workout = services::rename_workout(state.store(), caller, id, &req).await?;

    Ok(ApiReply::ok(workout))
}

#[utoipa::path(
    delete,
    path = "/api/workouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Workout id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Workout and its sessions deleted"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(id): ResourceId,
) -> WebResult<ApiReply<()>> {
    services::delete_workout(state.store(), caller, id).await?;

    Ok(ApiReply::ok(()))
}
