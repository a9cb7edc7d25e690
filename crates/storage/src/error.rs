use thiserror::Error;

use crate::result::StoreStatus;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        self.has_sqlstate(UNIQUE_VIOLATION)
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        self.has_sqlstate(FOREIGN_KEY_VIOLATION)
    }

    pub fn is_check_violation(&self) -> bool {
        self.has_sqlstate(CHECK_VIOLATION)
    }

    /// Name of the violated constraint, when the engine reports one.
    pub fn constraint(&self) -> Option<&str> {
        match self {
            StorageError::Database(sqlx::Error::Database(e)) => e.constraint(),
            _ => None,
        }
    }

    /// Classifies the error from the structured SQLSTATE code, never from message text.
    pub fn status(&self) -> StoreStatus {
        match self {
            StorageError::NotFound | StorageError::Database(sqlx::Error::RowNotFound) => {
                StoreStatus::NotFound
            }
            StorageError::ConstraintViolation(_) => StoreStatus::InvalidOperation,
            _ if self.is_unique_violation() => StoreStatus::DuplicateName,
            // a dangling parent reference behaves like a missing parent
            _ if self.is_foreign_key_violation() => StoreStatus::NotFound,
            _ if self.is_check_violation() => StoreStatus::InvalidOperation,
            _ => StoreStatus::DatabaseError,
        }
    }

    fn has_sqlstate(&self, code: &str) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some(code)
        )
    }
}
