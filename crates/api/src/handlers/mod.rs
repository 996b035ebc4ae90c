//! Request handlers.
//!
//! Handlers translate HTTP to calls on `mobdir_core` and the repositories in
//! `mobdir_db`, mapping failures through [`AppError`](crate::error::AppError).

pub mod entries;
pub mod states;

use crate::error::AppError;

/// Fallback for any unrouted path.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Fallback for a routed path hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
