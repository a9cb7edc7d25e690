pub mod auth;
pub mod authz;
pub mod config;
pub mod error;
pub mod extract;
pub mod features;
pub mod http;
pub mod middleware;
pub mod openapi;
pub mod response;
pub mod state;

use std::{any::Any, time::Duration};

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{self, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::WebError,
    http::ApiReply,
    response::ApiError,
    state::AppState,
};

/// Builds the application router with every feature mounted under `/api`.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(features::auth::routes::routes(state.clone()))
        .merge(features::workouts::routes::routes(state.clone()))
        .merge(features::sessions::routes::routes(state.clone()))
        .merge(features::session_exercises::routes::routes(state.clone()))
        .merge(features::sets::routes::routes(state.clone()))
        .merge(features::exercises::routes::routes(state.clone()));

    let cors_layer = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .fallback(fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(CatchPanicLayer::custom(handle_panic))
}

async fn health() -> ApiReply<&'static str> {
    ApiReply::ok("ok")
}

async fn fallback() -> WebError {
    WebError::not_found()
}

// Panic payloads are never echoed to the client.
fn handle_panic(_panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Request handler panicked");
    ApiReply::<()>::failure(ApiError::UnknownError).into_response()
}
