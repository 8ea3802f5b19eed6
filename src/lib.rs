//! User API server.
//!
//! A small axum service built around one error-handling seam: every failure
//! a handler can produce (validation, business rule, or unexpected fault) is
//! translated by `ApiError` into the same JSON error body carrying a
//! symbolic code, a message, and optional per-field errors.

pub mod config;
pub mod error;
pub mod request_id;
pub mod routes;
pub mod state;
pub mod users;
pub mod validation;

pub use error::{ApiError, ErrorCode};
pub use routes::router;
pub use state::AppState;
