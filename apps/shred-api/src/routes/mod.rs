//! HTTP route modules, one per catalog collection.
//!
//! | Method | Path                 | Success          |
//! |--------|----------------------|------------------|
//! | GET    | `/health`            | 200 / 503        |
//! | POST   | `/{collection}`      | 201 + full row   |
//! | GET    | `/{collection}`      | 200 + array      |
//! | GET    | `/{collection}/{key}`| 200              |
//! | PUT    | `/{collection}/{key}`| 200 + full row   |
//! | DELETE | `/{collection}/{key}`| 204              |

pub mod apparatus;
pub mod categories;
pub mod exercises;
pub mod health;
pub mod licenses;
pub mod muscles;
