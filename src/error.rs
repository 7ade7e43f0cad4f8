//! Error Handling Infrastructure
//!
//! This module defines all error types used on the consumer side of the DBCode API.
//! All errors are structured and map to specific error codes for programmatic handling.
//!
//! # Error Categories
//! - `HostNotFound`: No host is registered under the requested identifier
//! - `ActivationFailed`: The host was found but could not be activated
//! - `OperationFailed`: The host reported a failed operation result
//!
//! Faults inside the host itself never surface as `ApiError`; the contract
//! collapses them into [`ConnectionOperationResult`](crate::ConnectionOperationResult)
//! envelopes instead.

use thiserror::Error;

/// Main error type for DBCode API acquisition and result handling
#[derive(Error, Debug)]
pub enum ApiError {
    /// No host registered under the requested identifier
    #[error("Host not found: {0}")]
    HostNotFound(String),

    /// Host activation failed
    #[error("Activation failed ({host}): {detail}")]
    ActivationFailed { host: String, detail: String },

    /// The host reported a failed operation
    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl ApiError {
    /// Convert error to error code string
    ///
    /// Error codes are stable and suitable for programmatic handling.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::HostNotFound(_) => "HOST_NOT_FOUND",
            Self::ActivationFailed { .. } => "ACTIVATION_FAILED",
            Self::OperationFailed(_) => "OPERATION_FAILED",
        }
    }

    /// Get human-readable error message (no sensitive data)
    ///
    /// The message never contains credentials; hosts are expected to keep
    /// passwords out of operation error strings as well.
    #[must_use]
    pub fn message(&self) -> String {
        // Use Display implementation from thiserror
        self.to_string()
    }

    /// Create a host not found error
    pub fn host_not_found(host: impl Into<String>) -> Self {
        Self::HostNotFound(host.into())
    }

    /// Create an activation failed error
    pub fn activation_failed(host: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::ActivationFailed { host: host.into(), detail: detail.into() }
    }

    /// Create an operation failed error
    pub fn operation_failed(message: impl Into<String>) -> Self {
        Self::OperationFailed(message.into())
    }
}

/// Result type alias for DBCode API operations
pub type Result<T> = std::result::Result<T, ApiError>;
