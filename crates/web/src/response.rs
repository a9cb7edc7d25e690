//! Domain-facing response envelope.
//!
//! Every API reply, success or failure, is an [`ApiResponse`] serialized as
//! `{"success", "data", "error", "message"}`. Failures carry one of the eight
//! [`ApiError`] kinds and a fixed message for that kind; persistence
//! diagnostics are logged and never reach the client.

use serde::{Deserialize, Serialize};
use storage::{StoreFailure, StoreResult, StoreStatus};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ApiError {
    UnknownError,
    InvalidCredentials,
    UserNotFound,
    EmailTaken,
    WeakPassword,
    InvalidEmail,
    NameAlreadyExists,
    NotFound,
}

impl ApiError {
    pub const ALL: [ApiError; 8] = [
        ApiError::UnknownError,
        ApiError::InvalidCredentials,
        ApiError::UserNotFound,
        ApiError::EmailTaken,
        ApiError::WeakPassword,
        ApiError::InvalidEmail,
        ApiError::NameAlreadyExists,
        ApiError::NotFound,
    ];

    /// Domain error for a persistence status; `None` only for success.
    pub fn from_status(status: StoreStatus) -> Option<Self> {
        match status {
            StoreStatus::Success => None,
            StoreStatus::NotFound => Some(ApiError::NotFound),
            StoreStatus::DuplicateName => Some(ApiError::NameAlreadyExists),
            StoreStatus::InvalidOperation | StoreStatus::DatabaseError => {
                Some(ApiError::UnknownError)
            }
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ApiError::UnknownError => "An internal error occurred",
            ApiError::InvalidCredentials => "Invalid credentials",
            ApiError::UserNotFound => "User not found",
            ApiError::EmailTaken => "Email is already registered",
            ApiError::WeakPassword => {
                "Password must be at least 8 characters and contain a letter and a digit"
            }
            ApiError::InvalidEmail => "Email address is invalid",
            ApiError::NameAlreadyExists => "Name already exists",
            ApiError::NotFound => "Resource not found",
        }
    }
}

/// Raised when an envelope is assembled from parts that break the success/failure contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EnvelopeViolation {
    #[error("a successful response must carry data")]
    MissingData,

    #[error("a successful response must not carry an error or message")]
    UnexpectedError,

    #[error("a failed response must carry an error kind and a message")]
    MissingError,

    #[error("a failed response must not carry data")]
    UnexpectedData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    error: Option<ApiError>,
    message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn from_parts(
        success: bool,
        data: Option<T>,
        error: Option<ApiError>,
        message: Option<String>,
    ) -> Result<Self, EnvelopeViolation> {
        if success {
            if error.is_some() || message.is_some() {
                return Err(EnvelopeViolation::UnexpectedError);
            }
            if data.is_none() {
                return Err(EnvelopeViolation::MissingData);
            }
        } else {
            if data.is_some() {
                return Err(EnvelopeViolation::UnexpectedData);
            }
            let blank = message.as_deref().is_none_or(|m| m.trim().is_empty());
            if error.is_none() || blank {
                return Err(EnvelopeViolation::MissingError);
            }
        }

        Ok(Self {
            success,
            data,
            error,
            message,
        })
    }

    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            message: Some(error.message().to_string()),
        }
    }

    /// Maps a persistence failure, logging its diagnostic message.
    pub fn from_failure(failure: &StoreFailure) -> Self {
        let error = ApiError::from_status(failure.status()).unwrap_or(ApiError::UnknownError);
        match failure.status() {
            StoreStatus::DatabaseError => {
                tracing::error!(status = %failure.status(), "{}", failure.message())
            }
            _ => tracing::warn!(status = %failure.status(), "{}", failure.message()),
        }
        Self::failure(error)
    }

    pub fn from_store(result: StoreResult<T>) -> Self {
        match result {
            StoreResult::Success(data) => Self::success(data),
            StoreResult::Failure(failure) => Self::from_failure(&failure),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<ApiError> {
        self.error
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_maps_to_a_domain_outcome() {
        for status in StoreStatus::ALL {
            let error = ApiError::from_status(status);
            match status {
                StoreStatus::Success => assert_eq!(error, None),
                StoreStatus::NotFound => assert_eq!(error, Some(ApiError::NotFound)),
                StoreStatus::DuplicateName => {
                    assert_eq!(error, Some(ApiError::NameAlreadyExists))
                }
                StoreStatus::InvalidOperation | StoreStatus::DatabaseError => {
                    assert_eq!(error, Some(ApiError::UnknownError))
                }
            }
        }
    }

    #[test]
    fn store_results_become_envelopes() {
        let ok = ApiResponse::from_store(StoreResult::success(5));
        assert!(ok.is_success());
        assert_eq!(ok.data(), Some(&5));
        assert_eq!(ok.error(), None);
        assert_eq!(ok.message(), None);

        let duplicate = ApiResponse::<i32>::from_store(StoreResult::duplicate_name(
            "workouts_owner_name_key",
        ));
        assert!(!duplicate.is_success());
        assert_eq!(duplicate.error(), Some(ApiError::NameAlreadyExists));
        assert_eq!(duplicate.data(), None);
    }

    #[test]
    fn persistence_messages_are_not_exposed() {
        let response = ApiResponse::<i32>::from_store(StoreResult::database_error(
            "connection refused: 10.0.0.4:5432",
        ));
        assert_eq!(response.error(), Some(ApiError::UnknownError));
        assert_eq!(response.message(), Some(ApiError::UnknownError.message()));
    }

    #[test]
    fn success_with_error_or_message_is_rejected() {
        assert_eq!(
            ApiResponse::from_parts(true, Some(1), Some(ApiError::NotFound), None),
            Err(EnvelopeViolation::UnexpectedError)
        );
        assert_eq!(
            ApiResponse::from_parts(true, Some(1), None, Some("ok".to_string())),
            Err(EnvelopeViolation::UnexpectedError)
        );
        assert_eq!(
            ApiResponse::<i32>::from_parts(true, None, None, None),
            Err(EnvelopeViolation::MissingData)
        );
    }

    #[test]
    fn failure_without_kind_or_message_is_rejected() {
        assert_eq!(
            ApiResponse::<i32>::from_parts(false, None, None, Some("gone".to_string())),
            Err(EnvelopeViolation::MissingError)
        );
        assert_eq!(
            ApiResponse::<i32>::from_parts(false, None, Some(ApiError::NotFound), None),
            Err(EnvelopeViolation::MissingError)
        );
        assert_eq!(
            ApiResponse::<i32>::from_parts(false, None, Some(ApiError::NotFound), Some(" ".into())),
            Err(EnvelopeViolation::MissingError)
        );
        assert_eq!(
            ApiResponse::from_parts(
                false,
                Some(1),
                Some(ApiError::NotFound),
                Some("gone".to_string())
            ),
            Err(EnvelopeViolation::UnexpectedData)
        );
    }

    #[test]
    fn wire_shape_has_all_four_fields() {
        let body = serde_json::to_value(ApiResponse::<i32>::failure(ApiError::NotFound)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "data": null,
                "error": "NotFound",
                "message": "Resource not found",
            })
        );

        let body = serde_json::to_value(ApiResponse::success(())).unwrap();
        assert_eq!(body["success"], true);
        assert!(body["data"].is_null());
        assert!(body["error"].is_null());
    }
}
