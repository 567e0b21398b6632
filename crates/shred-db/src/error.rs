//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ├── RowNotFound / 0 rows affected ──► DbError::NotFound          │
//! │       │                                     (names entity + key)       │
//! │       │                                                                 │
//! │       └── anything else ──────────────────► DbError::Query             │
//! │                                             (passed through as-is)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in shred-api) ← status code + JSON body                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Database operation errors.
///
/// Repositories return exactly two kinds of failure: a not-found condition
/// they detected themselves, or the driver's error untouched.
#[derive(Debug, Error)]
pub enum DbError {
    /// No row matched the key of a read, update or delete.
    ///
    /// ## When This Occurs
    /// - `get` with a key that was never created
    /// - `update` / `delete` affecting zero rows
    #[error("{entity} with {key_label} {key} not found")]
    NotFound {
        entity: &'static str,
        key_label: &'static str,
        key: String,
    },

    /// Any other failure from the driver (constraint violation, I/O,
    /// decode error, closed pool, ...). Never retried, never rewritten.
    #[error(transparent)]
    Query(#[from] sqlx::Error),

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created or opened
    /// - File permissions issue
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    ///
    /// ## When This Occurs
    /// - Invalid SQL in migration
    /// - Migration checksum / version conflict
    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

impl DbError {
    /// Creates a NotFound error for an entity and its normalized key.
    pub fn not_found(entity: &'static str, key_label: &'static str, key: impl ToString) -> Self {
        DbError::NotFound {
            entity,
            key_label,
            key: key.to_string(),
        }
    }

    /// Whether this is the not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. })
    }

    /// Whether the driver reported a UNIQUE / PRIMARY KEY violation
    /// (e.g. creating a code that already exists).
    pub fn is_unique_violation(&self) -> bool {
        match self {
            DbError::Query(sqlx::Error::Database(db_err)) => db_err.is_unique_violation(),
            _ => false,
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
