use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::StoreFailure;
use validator::ValidationErrors;

use crate::http::{ApiReply, status_for_error};
use crate::response::{ApiError, ApiResponse};

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    /// A domain failure reported with its fixed envelope.
    Api(ApiError),
    /// A persistence failure, mapped to its domain kind on the way out.
    Store(StoreFailure),
    Validation(ValidationErrors),
    BadRequest(String),
    Unauthorized,
    InternalServerError(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "{}", e.message()),
            Self::Store(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::InternalServerError(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl WebError {
    pub fn not_found() -> Self {
        Self::Api(ApiError::NotFound)
    }

    /// Domain kind this error is reported as, if it has one.
    pub fn kind(&self) -> Option<ApiError> {
        match self {
            Self::Api(error) => Some(*error),
            Self::Store(failure) => ApiError::from_status(failure.status()),
            Self::Unauthorized => Some(ApiError::InvalidCredentials),
            Self::InternalServerError(_) => Some(ApiError::UnknownError),
            Self::Validation(_) | Self::BadRequest(_) => None,
        }
    }
}

// Transport rejections keep the envelope's shape but carry no domain kind.
fn rejection(message: &str, details: Vec<String>) -> Response {
    let body = json!({
        "success": false,
        "data": null,
        "error": null,
        "message": message,
        "details": details,
    });

    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            Self::Api(error) => ApiReply::<()>::failure(error).into_response(),
            Self::Store(failure) => {
                let response = ApiResponse::<()>::from_failure(&failure);
                let status = response
                    .error()
                    .map(status_for_error)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, Json(response)).into_response()
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                rejection("Validation failed", field_errors)
            }
            Self::BadRequest(msg) => rejection("Malformed request", vec![msg]),
            Self::Unauthorized => {
                tracing::warn!("Rejected request without a valid bearer token");
                ApiReply::<()>::failure(ApiError::InvalidCredentials).into_response()
            }
            Self::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                ApiReply::<()>::failure(ApiError::UnknownError).into_response()
            }
        }
    }
}

impl From<ApiError> for WebError {
    fn from(error: ApiError) -> Self {
        Self::Api(error)
    }
}

impl From<StoreFailure> for WebError {
    fn from(failure: StoreFailure) -> Self {
        Self::Store(failure)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;
    use storage::StoreResult;

    #[test]
    fn store_failures_report_their_domain_status() {
        let failure = StoreResult::<()>::not_found("session 7 does not exist")
            .into_result()
            .unwrap_err();
        let response = WebError::from(failure).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let failure = StoreResult::<()>::invalid_operation("sets_reps_check")
            .into_result()
            .unwrap_err();
        let response = WebError::from(failure).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn transport_rejections_have_no_domain_kind() {
        let error = WebError::BadRequest("expected value at line 1".to_string());
        assert_eq!(error.kind(), None);
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_token_is_invalid_credentials() {
        assert_eq!(
            WebError::Unauthorized.kind(),
            Some(ApiError::InvalidCredentials)
        );
        assert_eq!(
            WebError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
