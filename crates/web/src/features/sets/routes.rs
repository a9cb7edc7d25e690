use axum::{Router, middleware, routing::get};

use super::handlers::{create_set, delete_set, get_set, list_sets, update_set};
use crate::{middleware::auth::require_auth, state::AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/session-exercises/:id/sets",
            get(list_sets).post(create_set),
        )
        .route("/sets/:id", get(get_set).put(update_set).delete(delete_set))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
