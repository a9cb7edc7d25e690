pub mod password;
pub mod token;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::error::WebError;

pub use token::TokenKeys;

/// Id of the authenticated user making the request.
///
/// Inserted into the request extensions by [`crate::middleware::auth::require_auth`]
/// and passed explicitly to every service call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallerId(pub Uuid);

#[axum::async_trait]
impl<S> FromRequestParts<S> for CallerId
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CallerId>()
            .copied()
            .ok_or(WebError::Unauthorized)
    }
}
