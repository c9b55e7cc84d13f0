//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and handlers
//! that can be used by any HTTP server implementation (`tiny_http`, axum,
//! etc.) or directly by the CLI.
//!
//! ## Design
//!
//! - **Handlers take their collaborators explicitly**: see [`ApiContext`]
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    ApiContext, MAX_VISIBLE_CHARS, get_dependency_health, get_environment, get_health, get_status,
    mask_value,
};
pub use types::{ApiResponse, EnvironmentData, MaskData, MaskRequest, StatusData};
