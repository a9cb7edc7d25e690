use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use crate::{auth::CallerId, error::WebError, state::AppState};

/// Rejects requests without a valid bearer token and records the caller's id.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = extract_bearer(req.headers()).ok_or(WebError::Unauthorized)?;

    let user_id = state.tokens.verify(token).ok_or_else(|| {
        tracing::warn!("Invalid or expired access token");
        WebError::Unauthorized
    })?;

    req.extensions_mut().insert(CallerId(user_id));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let token = headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?
        .trim();

    (!token.is_empty()).then_some(token)
}
