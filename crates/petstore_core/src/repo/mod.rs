//! Repository layer: per-entity SQL over a borrowed connection.
//!
//! # Responsibility
//! - Keep SQL text and parameter binding for `kind` and `pet` in one place.
//! - Surface SQLite errors unchanged (wrapped, never translated).
//!
//! # Invariants
//! - Every write is a single autocommitted statement.
//! - Reads by id return `Ok(None)` for a missing row, never an error.
//! - Updates and deletes that match no row succeed silently.

use crate::db::DbError;
use crate::model::ValidationError;
use rusqlite::ErrorCode;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kind_repo;
pub mod pet_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error returned by repository and store operations.
#[derive(Debug)]
pub enum RepoError {
    /// Caller payload was rejected before reaching SQLite.
    Validation(ValidationError),
    /// SQLite or bootstrap failure, including constraint violations.
    Db(DbError),
}

impl RepoError {
    /// Returns whether SQLite rejected the statement on a constraint
    /// (`NOT NULL`, `UNIQUE`, `FOREIGN KEY`).
    pub fn is_constraint_violation(&self) -> bool {
        self.sqlite_code() == Some(ErrorCode::ConstraintViolation)
    }

    /// Returns whether the database was busy or locked by another writer.
    ///
    /// The store never retries; callers may retry on this condition.
    pub fn is_busy(&self) -> bool {
        matches!(
            self.sqlite_code(),
            Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked)
        )
    }

    fn sqlite_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Db(err) => err.sqlite_code(),
            Self::Validation(_) => None,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
