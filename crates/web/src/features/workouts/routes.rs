use axum::{Router, middleware, routing::get};

use super::handlers::{create_workout, delete_workout, get_workout, list_workouts, update_workout};
use crate::{middleware::auth::require_auth, state::AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/workouts", get(list_workouts).post(create_workout))
        .route(
            "/workouts/:id",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
