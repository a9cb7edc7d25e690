use axum::extract::State;
use storage::dto::user::{
    LoginRequest, RegisterRequest, RegistrationResponse, TokenResponse, UserResponse,
};

use crate::{
    auth::CallerId,
    error::WebResult,
    extract::ValidatedJson,
    http::ApiReply,
    response::ApiResponse,
    state::AppState,
};

use super::services;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created with its default workouts", body = ApiResponse<RegistrationResponse>),
        (status = 400, description = "Invalid email or weak password"),
        (status = 409, description = "Account already exists")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> WebResult<ApiReply<RegistrationResponse>> {
    let registered = services::register(state.store(), &req).await?;

    Ok(ApiReply::created(registered, "/api/auth/me".to_string()))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Access token issued", body = ApiResponse<TokenResponse>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> WebResult<ApiReply<TokenResponse>> {
    let token = services::login(state.store(), &state.tokens, &req).await?;

    Ok(ApiReply::ok(token))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The authenticated user", body = ApiResponse<UserResponse>),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User no longer exists")
    ),
    tag = "auth"
)]
pub async fn me(
    State(state): State<AppState>,
    caller: CallerId,
) -> WebResult<ApiReply<UserResponse>> {
    let user = services::current_user(state.store(), caller).await?;

    Ok(ApiReply::ok(user))
}
