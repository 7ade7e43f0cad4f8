//! Operation Result Envelope
//!
//! This module defines the single result shape every DBCode API operation
//! resolves to. The host collapses all outcomes, including its own internal
//! faults, into this envelope; operations never reject with a raw error.
//!
//! # Output Contract
//! - Success: `{"success": true}`
//! - Failure: `{"success": false, "error": "..."}`
//!
//! The error string is optional even on failure; hosts are allowed to report
//! a bare `{"success": false}`. A batch of N connections yields exactly one
//! envelope, with no per-element granularity.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Outcome of a DBCode API operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ConnectionOperationResult {
    /// Whether the operation was applied
    pub success: bool,

    /// Human-readable failure description, if the host supplied one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConnectionOperationResult {
    /// Create a success envelope
    #[must_use]
    pub const fn ok() -> Self {
        Self { success: true, error: None }
    }

    /// Create a failure envelope with a description
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self { success: false, error: Some(error.into()) }
    }

    /// Whether the operation was applied
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Convert the envelope into a `Result` for `?`-style handling
    ///
    /// A failure with no error string maps to a generic
    /// [`ApiError::OperationFailed`] message.
    pub fn into_result(self) -> crate::error::Result<()> {
        if self.success {
            Ok(())
        } else {
            let message = self.error.unwrap_or_else(|| "operation failed".to_string());
            Err(ApiError::operation_failed(message))
        }
    }
}
