use axum::{Router, middleware, routing::get};

use super::handlers::{create_session, delete_session, get_session, list_sessions, update_session};
use crate::{middleware::auth::require_auth, state::AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/workouts/:id/sessions",
            get(list_sessions).post(create_session),
        )
        .route(
            "/sessions/:id",
            get(get_session).put(update_session).delete(delete_session),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
