//! # shred-db: Database Layer for Shred
//!
//! This crate provides database access for the Shred exercise catalog.
//! It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shred Data Flow                                  │
//! │                                                                         │
//! │  HTTP handler (PUT /categories/strength)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     shred-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository<E>│    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │               │    │ Exercise      │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ Category      │    │ 001_catalog_ │  │   │
//! │  │   │ Connection    │    │ Muscle        │    │   schema.sql │  │   │
//! │  │   │ Management    │    │ Apparatus     │    │              │  │   │
//! │  │   │               │    │ License       │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database (shred.db)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The generic repository and the five entity schemas
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shred_core::{CategoryRequest, Code};
//! use shred_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("shred.db")).await?;
//!
//! db.categories()
//!     .create(&CategoryRequest::new("strength", "Strength", ""))
//!     .await?;
//! let strength = db.categories().get(&Code::new("STRENGTH")).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::{
    ApparatusRepository, CatalogEntity, CategoryRepository, EntityKey, ExerciseRepository,
    LicenseRepository, MuscleRepository, Repository,
};
