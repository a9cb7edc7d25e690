//! Outcome of a single persistence operation.
//!
//! A [`StoreResult`] is either a success carrying its payload, or a failure
//! carrying a [`StoreStatus`] and a diagnostic message. The enum makes the
//! "payload xor message" rule structural; [`StoreResult::from_parts`] and
//! [`StoreOutcome::from_status`] enforce it for callers assembling a result
//! from loose parts, rejecting a violation in either direction.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreStatus {
    Success,
    DuplicateName,
    NotFound,
    InvalidOperation,
    DatabaseError,
}

impl StoreStatus {
    pub const ALL: [StoreStatus; 5] = [
        StoreStatus::Success,
        StoreStatus::DuplicateName,
        StoreStatus::NotFound,
        StoreStatus::InvalidOperation,
        StoreStatus::DatabaseError,
    ];

    pub fn is_success(self) -> bool {
        matches!(self, StoreStatus::Success)
    }
}

impl fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreStatus::Success => "success",
            StoreStatus::DuplicateName => "duplicate name",
            StoreStatus::NotFound => "not found",
            StoreStatus::InvalidOperation => "invalid operation",
            StoreStatus::DatabaseError => "database error",
        };
        f.write_str(name)
    }
}

/// Raised when a result is assembled from parts that break the success/failure contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("a successful result must carry a payload")]
    MissingPayload,

    #[error("a successful result must not carry a message")]
    UnexpectedMessage,

    #[error("a failed result must carry a message")]
    MissingMessage,

    #[error("a failed result must not carry a payload")]
    UnexpectedPayload,
}

/// Non-success status plus its diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreFailure {
    status: StoreStatus,
    message: String,
}

impl StoreFailure {
    pub fn new(status: StoreStatus, message: impl Into<String>) -> Result<Self, ContractViolation> {
        let message = message.into();
        if status.is_success() {
            return Err(ContractViolation::UnexpectedMessage);
        }
        if message.trim().is_empty() {
            return Err(ContractViolation::MissingMessage);
        }
        Ok(Self { status, message })
    }

    pub fn status(&self) -> StoreStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    // Infallible constructor for the fixed statuses used inside this crate.
    fn of(status: StoreStatus, message: impl Into<String>) -> Self {
        debug_assert!(!status.is_success());
        let message = message.into();
        let message = if message.trim().is_empty() {
            status.to_string()
        } else {
            message
        };
        Self { status, message }
    }
}

impl fmt::Display for StoreFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl From<StorageError> for StoreFailure {
    fn from(error: StorageError) -> Self {
        let message = match error.constraint() {
            Some(constraint) => format!("{error} (constraint {constraint})"),
            None => error.to_string(),
        };
        Self::of(error.status(), message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum StoreResult<T> {
    Success(T),
    Failure(StoreFailure),
}

/// Payload-less form, used by pure writes such as deletes.
pub type StoreOutcome = StoreResult<()>;

impl<T> StoreResult<T> {
    pub fn from_parts(
        status: StoreStatus,
        payload: Option<T>,
        message: Option<String>,
    ) -> Result<Self, ContractViolation> {
        match (status.is_success(), payload, message) {
            (true, _, Some(_)) => Err(ContractViolation::UnexpectedMessage),
            (true, None, None) => Err(ContractViolation::MissingPayload),
            (true, Some(payload), None) => Ok(Self::Success(payload)),
            (false, Some(_), _) => Err(ContractViolation::UnexpectedPayload),
            (false, None, None) => Err(ContractViolation::MissingMessage),
            (false, None, Some(message)) => StoreFailure::new(status, message).map(Self::Failure),
        }
    }

    pub fn success(payload: T) -> Self {
        Self::Success(payload)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Failure(StoreFailure::of(StoreStatus::NotFound, message))
    }

    pub fn duplicate_name(message: impl Into<String>) -> Self {
        Self::Failure(StoreFailure::of(StoreStatus::DuplicateName, message))
    }

    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::Failure(StoreFailure::of(StoreStatus::InvalidOperation, message))
    }

    pub fn database_error(message: impl Into<String>) -> Self {
        Self::Failure(StoreFailure::of(StoreStatus::DatabaseError, message))
    }

    pub fn status(&self) -> StoreStatus {
        match self {
            Self::Success(_) => StoreStatus::Success,
            Self::Failure(failure) => failure.status(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Failure(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure.message()),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StoreResult<U> {
        match self {
            Self::Success(payload) => StoreResult::Success(f(payload)),
            Self::Failure(failure) => StoreResult::Failure(failure),
        }
    }

    pub fn into_result(self) -> Result<T, StoreFailure> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl StoreOutcome {
    pub fn from_status(
        status: StoreStatus,
        message: Option<String>,
    ) -> Result<Self, ContractViolation> {
        let payload = status.is_success().then_some(());
        Self::from_parts(status, payload, message)
    }

    pub fn done() -> Self {
        Self::Success(())
    }
}

impl<T> From<StorageError> for StoreResult<T> {
    fn from(error: StorageError) -> Self {
        Self::Failure(error.into())
    }
}

impl<T> From<crate::error::Result<T>> for StoreResult<T> {
    fn from(result: crate::error::Result<T>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(error) => error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_with_message_is_rejected() {
        let result =
            StoreResult::from_parts(StoreStatus::Success, Some(1), Some("done".to_string()));
        assert_eq!(result, Err(ContractViolation::UnexpectedMessage));
    }

    #[test]
    fn success_without_payload_is_rejected() {
        let result = StoreResult::<i32>::from_parts(StoreStatus::Success, None, None);
        assert_eq!(result, Err(ContractViolation::MissingPayload));
    }

    #[test]
    fn failure_without_message_is_rejected() {
        for status in StoreStatus::ALL.into_iter().filter(|s| !s.is_success()) {
            let result = StoreResult::<i32>::from_parts(status, None, None);
            assert_eq!(result, Err(ContractViolation::MissingMessage), "{status}");

            let blank = StoreResult::<i32>::from_parts(status, None, Some("  ".to_string()));
            assert_eq!(blank, Err(ContractViolation::MissingMessage), "{status}");
        }
    }

    #[test]
    fn failure_with_payload_is_rejected() {
        let result =
            StoreResult::from_parts(StoreStatus::NotFound, Some(7), Some("gone".to_string()));
        assert_eq!(result, Err(ContractViolation::UnexpectedPayload));
    }

    #[test]
    fn well_formed_parts_are_accepted() {
        let success = StoreResult::from_parts(StoreStatus::Success, Some(3), None).unwrap();
        assert_eq!(success.payload(), Some(&3));
        assert_eq!(success.message(), None);

        let failure = StoreResult::<i32>::from_parts(
            StoreStatus::DuplicateName,
            None,
            Some("workout name taken".to_string()),
        )
        .unwrap();
        assert_eq!(failure.status(), StoreStatus::DuplicateName);
        assert_eq!(failure.message(), Some("workout name taken"));
        assert_eq!(failure.payload(), None);
    }

    #[test]
    fn payload_less_outcome_follows_the_same_contract() {
        assert!(StoreOutcome::from_status(StoreStatus::Success, None).unwrap().is_success());
        assert_eq!(
            StoreOutcome::from_status(StoreStatus::Success, Some("ok".to_string())),
            Err(ContractViolation::UnexpectedMessage)
        );
        assert_eq!(
            StoreOutcome::from_status(StoreStatus::DatabaseError, None),
            Err(ContractViolation::MissingMessage)
        );
    }

    #[test]
    fn failure_cannot_claim_success() {
        assert_eq!(
            StoreFailure::new(StoreStatus::Success, "fine"),
            Err(ContractViolation::UnexpectedMessage)
        );
    }

    #[test]
    fn storage_errors_are_classified_without_reading_messages() {
        let missing: StoreResult<()> = StorageError::NotFound.into();
        assert_eq!(missing.status(), StoreStatus::NotFound);

        let row: StoreResult<()> = StorageError::Database(sqlx::Error::RowNotFound).into();
        assert_eq!(row.status(), StoreStatus::NotFound);

        let constraint: StoreResult<()> =
            StorageError::ConstraintViolation("reps must be positive".to_string()).into();
        assert_eq!(constraint.status(), StoreStatus::InvalidOperation);

        let pool: StoreResult<()> = StorageError::Database(sqlx::Error::PoolTimedOut).into();
        assert_eq!(pool.status(), StoreStatus::DatabaseError);
        assert!(pool.message().is_some());
    }

    #[test]
    fn map_keeps_failures_intact() {
        let failure = StoreResult::<i32>::not_found("workout 1").map(|n| n * 2);
        assert_eq!(failure.status(), StoreStatus::NotFound);
        assert_eq!(failure.message(), Some("workout 1"));

        let success = StoreResult::success(2).map(|n| n * 2);
        assert_eq!(success.into_result(), Ok(4));
    }
}
