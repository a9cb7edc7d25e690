use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::auth::handlers::register,
        features::auth::handlers::login,
        features::auth::handlers::me,
        features::workouts::handlers::list_workouts,
        features::workouts::handlers::get_workout,
        features::workouts::handlers::create_workout,
        features::workouts::handlers::update_workout,
        features::workouts::handlers::delete_workout,
        features::sessions::handlers::list_sessions,
        features::sessions::handlers::create_session,
        features::sessions::handlers::get_session,
        features::sessions::handlers::update_session,
        features::sessions::handlers::delete_session,
        features::session_exercises::handlers::list_session_exercises,
        features::session_exercises::handlers::create_session_exercise,
        features::session_exercises::handlers::get_session_exercise,
        features::session_exercises::handlers::update_session_exercise,
        features::session_exercises::handlers::delete_session_exercise,
        features::sets::handlers::list_sets,
        features::sets::handlers::create_set,
        features::sets::handlers::get_set,
        features::sets::handlers::update_set,
        features::sets::handlers::delete_set,
        features::exercises::handlers::list_exercises,
        features::exercises::handlers::get_exercise,
        features::exercises::handlers::create_exercise,
        features::exercises::handlers::list_muscle_groups,
        features::exercises::handlers::list_muscle_categories,
    ),
    components(
        schemas(
            crate::response::ApiError,
            storage::dto::user::RegisterRequest,
            storage::dto::user::LoginRequest,
            storage::dto::user::UserResponse,
            storage::dto::user::RegistrationResponse,
            storage::dto::user::TokenResponse,
            storage::dto::workout::CreateWorkoutRequest,
            storage::dto::workout::UpdateWorkoutRequest,
            storage::dto::workout::WorkoutResponse,
            storage::dto::session::CreateSessionRequest,
            storage::dto::session::UpdateSessionRequest,
            storage::dto::session::SessionResponse,
            storage::dto::session_exercise::CreateSessionExerciseRequest,
            storage::dto::session_exercise::UpdateSessionExerciseRequest,
            storage::dto::session_exercise::SessionExerciseResponse,
            storage::dto::workout_set::CreateSetRequest,
            storage::dto::workout_set::UpdateSetRequest,
            storage::dto::workout_set::SetResponse,
            storage::dto::exercise::CreateExerciseRequest,
            storage::dto::exercise::ExerciseResponse,
            storage::dto::exercise::MuscleGroupResponse,
            storage::dto::exercise::MuscleCategoryResponse,
        )
    ),
    tags(
        (name = "auth", description = "Registration, login and the current user"),
        (name = "workouts", description = "Workouts owned by the caller"),
        (name = "sessions", description = "Training sessions of a workout"),
        (name = "session-exercises", description = "Exercises performed in a session"),
        (name = "sets", description = "Sets logged for a session exercise"),
        (name = "exercises", description = "Exercise and muscle library"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/workouts/{id}",
            "/api/sessions/{id}",
            "/api/session-exercises/{id}",
            "/api/sets/{id}",
            "/api/auth/register",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path}");
        }
    }
}
