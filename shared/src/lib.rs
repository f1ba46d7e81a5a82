//! Shared types for the Funhouse platform
//!
//! Common types used across the workspace: error codes and the unified
//! `AppError`/`ApiResponse` pair, pagination, entity models, and small
//! utility helpers.

pub mod error;
pub mod models;
pub mod page;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use page::{PAGE_SIZE, Page};
