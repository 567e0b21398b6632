//! # Error Types
//!
//! Domain-specific error types for shred-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shred-core errors (this file)                                         │
//! │  └── ValidationError  - Malformed request payloads                     │
//! │                                                                         │
//! │  shred-db errors (separate crate)                                      │
//! │  └── DbError          - Not-found and persistence failures             │
//! │                                                                         │
//! │  shred-api errors (in app)                                             │
//! │  └── ApiError         - What HTTP clients see (JSON body + status)     │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │        DbError ─────────┴──► ApiError ──► HTTP response                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at the request-decoding boundary, before any repository runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g. a code with spaces, a URL without a scheme).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two places that must name the same key disagree
    /// (e.g. the path code and the body code of an update).
    #[error("{field} mismatch: path has '{path}', body has '{body}'")]
    Mismatch {
        field: String,
        path: String,
        body: String,
    },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
