use storage::{
    Store, StoreStatus, UnitOfWork,
    dto::{
        user::{LoginRequest, RegisterRequest, RegistrationResponse, TokenResponse, UserResponse},
        workout::WorkoutResponse,
    },
    models::{User, Workout},
};

use crate::{
    auth::{CallerId, TokenKeys, password},
    error::{WebError, WebResult},
    response::ApiError,
};

/// Workouts every new account starts with, in creation order.
pub const DEFAULT_WORKOUTS: [&str; 3] = ["Push", "Pull", "Legs"];

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Create a user and its default workouts as one unit of work
pub async fn register(store: &dyn Store, req: &RegisterRequest) -> WebResult<RegistrationResponse> {
    let email = normalize_email(&req.email);
    if !password::is_valid_email(&email) {
        return Err(ApiError::InvalidEmail.into());
    }
    if !password::is_strong_password(&req.password) {
        return Err(ApiError::WeakPassword.into());
    }

    let password_hash = password::hash(req.password.clone()).await?;
    let user = User::new(email, password_hash);
    let workouts: Vec<Workout> = DEFAULT_WORKOUTS
        .iter()
        .map(|name| Workout::new(user.user_id, *name))
        .collect();

    let mut unit = UnitOfWork::new();
    unit.stage_user(user.clone());
    for workout in &workouts {
        unit.stage_workout(workout.clone());
    }

    store.accounts().commit(unit).await.into_result()?;

    tracing::info!(user_id = %user.user_id, "user registered");
    Ok(RegistrationResponse {
        user: user.into(),
        workouts: workouts.into_iter().map(WorkoutResponse::from).collect(),
    })
}

/// Check credentials and issue an access token
pub async fn login(
    store: &dyn Store,
    tokens: &TokenKeys,
    req: &LoginRequest,
) -> WebResult<TokenResponse> {
    let email = normalize_email(&req.email);

    // unknown email and wrong password are reported identically
    let user = match store.accounts().get_user_by_email(&email).await.into_result() {
        Ok(user) => user,
        Err(failure) if failure.status() == StoreStatus::NotFound => {
            return Err(ApiError::InvalidCredentials.into());
        }
        Err(failure) => return Err(failure.into()),
    };

    if !password::verify(req.password.clone(), user.password_hash.clone()).await? {
        tracing::warn!(user_id = %user.user_id, "failed login attempt");
        return Err(ApiError::InvalidCredentials.into());
    }

    Ok(TokenResponse {
        access_token: tokens.issue(user.user_id)?,
        token_type: "Bearer".to_string(),
        expires_in: tokens.ttl_seconds(),
    })
}

pub async fn current_user(store: &dyn Store, caller: CallerId) -> WebResult<UserResponse> {
    match store.accounts().get_user_by_id(caller.0).await.into_result() {
        Ok(user) => Ok(user.into()),
        Err(failure) if failure.status() == StoreStatus::NotFound => {
            Err(WebError::Api(ApiError::UserNotFound))
        }
        Err(failure) => Err(failure.into()),
    }
}
