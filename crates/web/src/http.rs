use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use uuid::Uuid;

use crate::response::{ApiError, ApiResponse};

/// How a successful reply is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    Ok,
    Created { location: String },
}

/// Canonical path of a single resource, used as the `Location` of a create.
pub fn resource_path(collection: &str, id: Uuid) -> String {
    format!("/api/{collection}/{id}")
}

pub fn status_for_error(error: ApiError) -> StatusCode {
    match error {
        ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        ApiError::UserNotFound => StatusCode::NOT_FOUND,
        ApiError::EmailTaken => StatusCode::CONFLICT,
        ApiError::WeakPassword => StatusCode::BAD_REQUEST,
        ApiError::InvalidEmail => StatusCode::BAD_REQUEST,
        ApiError::NameAlreadyExists => StatusCode::CONFLICT,
        ApiError::NotFound => StatusCode::NOT_FOUND,
        ApiError::UnknownError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn status_for<T>(response: &ApiResponse<T>, disposition: &Disposition) -> StatusCode {
    match (response.error(), disposition) {
        (Some(error), _) => status_for_error(error),
        (None, Disposition::Ok) => StatusCode::OK,
        (None, Disposition::Created { .. }) => StatusCode::CREATED,
    }
}

/// An envelope paired with its HTTP disposition.
#[derive(Debug)]
pub struct ApiReply<T> {
    response: ApiResponse<T>,
    disposition: Disposition,
}

impl<T> ApiReply<T> {
    pub fn ok(data: T) -> Self {
        Self {
            response: ApiResponse::success(data),
            disposition: Disposition::Ok,
        }
    }

    pub fn created(data: T, location: String) -> Self {
        Self {
            response: ApiResponse::success(data),
            disposition: Disposition::Created { location },
        }
    }

    pub fn failure(error: ApiError) -> Self {
        Self {
            response: ApiResponse::failure(error),
            disposition: Disposition::Ok,
        }
    }

    pub fn from_response(response: ApiResponse<T>, disposition: Disposition) -> Self {
        Self {
            response,
            disposition,
        }
    }

    pub fn status(&self) -> StatusCode {
        status_for(&self.response, &self.disposition)
    }
}

impl<T: Serialize> IntoResponse for ApiReply<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        let location = match (&self.disposition, self.response.is_success()) {
            (Disposition::Created { location }, true) => HeaderValue::from_str(location).ok(),
            _ => None,
        };

        let mut response = (status, Json(self.response)).into_response();
        if let Some(location) = location {
            response.headers_mut().insert(header::LOCATION, location);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_kind_has_a_status() {
        let expected = [
            (ApiError::UnknownError, 500),
            (ApiError::InvalidCredentials, 401),
            (ApiError::UserNotFound, 404),
            (ApiError::EmailTaken, 409),
            (ApiError::WeakPassword, 400),
            (ApiError::InvalidEmail, 400),
            (ApiError::NameAlreadyExists, 409),
            (ApiError::NotFound, 404),
        ];
        assert_eq!(expected.len(), ApiError::ALL.len());

        for (error, code) in expected {
            assert_eq!(status_for_error(error).as_u16(), code, "{error:?}");
        }
    }

    #[test]
    fn success_status_depends_on_disposition() {
        let ok = ApiResponse::success(1);
        assert_eq!(status_for(&ok, &Disposition::Ok), StatusCode::OK);

        let created = Disposition::Created {
            location: "/api/workouts/1".to_string(),
        };
        assert_eq!(status_for(&ok, &created), StatusCode::CREATED);
    }

    #[test]
    fn failed_create_uses_the_error_status() {
        let created = Disposition::Created {
            location: "/api/workouts/1".to_string(),
        };
        let failed = ApiResponse::<i32>::failure(ApiError::NameAlreadyExists);
        assert_eq!(status_for(&failed, &created), StatusCode::CONFLICT);
    }

    #[test]
    fn created_reply_sets_location() {
        let id = Uuid::new_v4();
        let response = ApiReply::created(1, resource_path("sets", id)).into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            format!("/api/sets/{id}").as_str()
        );
    }

    #[test]
    fn failed_create_has_no_location() {
        let reply = ApiReply::<i32>::from_response(
            ApiResponse::failure(ApiError::NotFound),
            Disposition::Created {
                location: "/api/sets/1".to_string(),
            },
        );
        let response = reply.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get(header::LOCATION).is_none());
    }
}
