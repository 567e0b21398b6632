//! # Shred API
//!
//! HTTP/JSON surface over the Shred exercise catalog.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shred API Request Flow                           │
//! │                                                                         │
//! │  HTTP request ──► TraceLayer ──► Router                                │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                     extractors: Path<Code> / ValidUuid / ValidJson<T>   │
//! │                     (decode + validate, 400 on failure)                 │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                     handler ──► state.db.<entity>() ──► SQLite          │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                     Json<T> or ApiError { code, message }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`config`] - Environment configuration
//! - [`error`] - `ApiError` and its status mapping
//! - [`extractors`] - Validating request extractors
//! - [`routes`] - One router per collection

pub mod config;
pub mod error;
pub mod extractors;
pub mod routes;

use axum::Router;
use shred_db::Database;
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// Holds the one database handle every handler builds its repository from.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::exercises::router())
        .merge(routes::categories::router())
        .merge(routes::muscles::router())
        .merge(routes::apparatus::router())
        .merge(routes::licenses::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
