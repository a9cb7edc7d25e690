use axum::{Router, middleware, routing::get};

use super::handlers::{
    create_session_exercise, delete_session_exercise, get_session_exercise,
    list_session_exercises, update_session_exercise,
};
use crate::{middleware::auth::require_auth, state::AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/sessions/:id/exercises",
            get(list_session_exercises).post(create_session_exercise),
        )
        .route(
            "/session-exercises/:id",
            get(get_session_exercise)
                .put(update_session_exercise)
                .delete(delete_session_exercise),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
