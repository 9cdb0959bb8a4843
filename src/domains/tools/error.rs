//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::domains::web::FetchError;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The tool's input failed validation before any work was done.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An outbound fetch or search failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Map to the corresponding MCP protocol error.
    ///
    /// Validation failures surface as invalid-params; everything else
    /// (fetch failures included) terminates the call as an internal error.
    pub fn into_mcp_error(self) -> McpError {
        match self {
            Self::Validation(msg) => McpError::invalid_params(msg, None),
            other => McpError::internal_error(other.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_invalid_params() {
        let err = ToolError::validation("too short").into_mcp_error();
        assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_fetch_maps_to_internal_error() {
        let err = ToolError::from(FetchError::status("https://example.com", 500)).into_mcp_error();
        assert_eq!(err.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("500"));
    }
}
