//! # shred-core: Pure Catalog Types for Shred
//!
//! This crate holds the types every other Shred crate speaks: the five
//! catalog entities, the requests that create and update them, the
//! upper-case [`Code`] key, and request validation. It has zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shred Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP clients (JSON)                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shred-api (axum handlers)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shred-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │ validation│  │   error   │                  │   │
//! │  │   │ Exercise  │  │  Validate │  │ Validation│                  │   │
//! │  │   │ Category… │  │  codes    │  │   Error   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shred-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities, requests, [`Code`], [`AuditRecord`]
//! - [`validation`] - Request validation
//! - [`error`] - Validation error type
//!
//! ## Example Usage
//!
//! ```rust
//! use shred_core::{CategoryRequest, Code};
//! use shred_core::validation::Validate;
//!
//! let request = CategoryRequest::new("strength", "Strength", "Strength training exercises");
//! assert_eq!(request.fields.code, Code::new("STRENGTH"));
//! assert!(request.validate().is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a code or license short name.
pub const MAX_CODE_LENGTH: usize = 32;

/// Maximum length of a display name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of free text (descriptions, instructions, cues, URLs).
pub const MAX_TEXT_LENGTH: usize = 4000;
