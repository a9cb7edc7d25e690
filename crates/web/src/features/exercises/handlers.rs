use axum::extract::State;
use storage::dto::exercise::{
    CreateExerciseRequest, ExerciseResponse, MuscleCategoryResponse, MuscleGroupResponse,
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
    path = "/api/exercises",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "System exercises and the caller's own", body = ApiResponse<Vec<ExerciseResponse>>)
    ),
    tag = "exercises"
)]
pub async fn list_exercises(
    State(state): State<AppState>,
    caller: CallerId,
) -> WebResult<ApiReply<Vec<ExerciseResponse>>> {
    let exercises = services::list_exercises(state.store(), caller).await?;

    Ok(ApiReply::ok(exercises))
}

#[utoipa::path(
    get,
    path = "/api/exercises/{id}",
    params(
        ("id" = Uuid, Path, description = "Exercise id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Exercise found", body = ApiResponse<ExerciseResponse>),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn get_exercise(
    State(state): State<AppState>,
    caller: CallerId,
    ResourceId(id): ResourceId,
) -> WebResult<ApiReply<ExerciseResponse>> {
    let exercise = services::get_exercise(state.store(), caller, id).await?;

    Ok(ApiReply::ok(exercise))
}

#[utoipa::path(
    post,
    path = "/api/exercises",
    request_body = CreateExerciseRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Custom exercise created", body = ApiResponse<ExerciseResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Muscle group not found")
    ),
    tag = "exercises"
)]
pub async fn create_exercise(
    State(state): State<AppState>,
    caller: CallerId,
    ValidatedJson(req): ValidatedJson<CreateExerciseRequest>,
) -> WebResult<ApiReply<ExerciseResponse>> {
    let exercise = services::create_exercise(state.store(), caller, &req).await?;
    let location = resource_path("exercises", exercise.exercise_id);

    Ok(ApiReply::created(exercise, location))
}

#[utoipa::path(
    get,
    path = "/api/muscle-groups",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Visible muscle groups", body = ApiResponse<Vec<MuscleGroupResponse>>)
    ),
    tag = "exercises"
)]
pub async fn list_muscle_groups(
    State(state): State<AppState>,
    caller: CallerId,
) -> WebResult<ApiReply<Vec<MuscleGroupResponse>>> {
    let groups = services::list_muscle_groups(state.store(), caller).await?;

    Ok(ApiReply::ok(groups))
}

#[utoipa::path(
    get,
    path = "/api/muscle-categories",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Visible muscle categories", body = ApiResponse<Vec<MuscleCategoryResponse>>)
    ),
    tag = "exercises"
)]
pub async fn list_muscle_categories(
    State(state): State<AppState>,
    caller: CallerId,
) -> WebResult<ApiReply<Vec<MuscleCategoryResponse>>> {
    let categories = services::list_muscle_categories(state.store(), caller).await?;

    Ok(ApiReply::ok(categories))
}
