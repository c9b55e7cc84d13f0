//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiErrorData};
use crate::core::models::{
    ComponentInfo, EnvEntry, HealthReport, RuntimeInfo, ValidationResult,
};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(err: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(err.into()),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for masking a value
#[derive(Debug, Deserialize)]
pub struct MaskRequest {
    /// Value to mask
    pub value: String,
    /// Visible prefix/suffix length (defaults to 2)
    #[serde(default)]
    pub visible: Option<usize>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Everything shown on the status page
#[derive(Debug, Serialize)]
pub struct StatusData {
    /// Basic runtime information
    pub runtime: RuntimeInfo,
    /// Compiled-in probe drivers
    pub components: Vec<ComponentInfo>,
    /// Dependency probe results
    pub health: HealthReport,
    /// Environment validation and table
    pub environment: EnvironmentData,
}

/// Environment endpoint response data
#[derive(Debug, Serialize)]
pub struct EnvironmentData {
    /// Result of checking the required keys
    pub validation: ValidationResult,
    /// Displayed variables, secrets redacted
    pub variables: Vec<EnvEntry>,
}

/// Mask endpoint response data
#[derive(Debug, Serialize)]
pub struct MaskData {
    /// Masked value
    pub masked: String,
    /// Visible window that was applied
    pub visible: usize,
}
