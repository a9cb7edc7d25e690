use axum::{Router, middleware, routing::get};

use super::handlers::{
    create_exercise, get_exercise, list_exercises, list_muscle_categories, list_muscle_groups,
};
use crate::{middleware::auth::require_auth, state::AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/exercises", get(list_exercises).post(create_exercise))
        .route("/exercises/:id", get(get_exercise))
        .route("/muscle-groups", get(list_muscle_groups))
        .route("/muscle-categories", get(list_muscle_categories))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
