//! Shared types for the Yummy restaurant platform
//!
//! Domain models, the unified error system and small utilities used by
//! the server crate and by any future client crates.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use types::{Timestamp, UserRole};
