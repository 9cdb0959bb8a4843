//! Server identity validation tool.
//!
//! Returns the configured owner number so connecting clients can confirm
//! they reached the right server instance. Takes no arguments.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use super::common::{RESPONSE_TAG, success_result};
use crate::core::config::Config;
use crate::domains::tools::ToolError;

/// Parameters for the validate tool. It takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ValidateParams {}

/// Identity validation tool implementation.
pub struct ValidateTool;

impl ValidateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "validate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Returns the server owner's phone number for identity validation.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(config: &Config) -> Result<CallToolResult, ToolError> {
        let number = config
            .credentials
            .owner_number
            .as_deref()
            .ok_or_else(|| ToolError::internal("MY_NUMBER is not configured"))?;

        Ok(success_result(format!(
            "{} Validation: {}",
            RESPONSE_TAG, number
        )))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        _arguments: serde_json::Value,
        config: Arc<Config>,
    ) -> Result<serde_json::Value, ToolError> {
        let result = Self::execute(&config)?;

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ValidateParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let config = config.clone();
            async move { Self::execute(&config).map_err(ToolError::into_mcp_error) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_validate_returns_owner_number() {
        let mut config = Config::default();
        config.credentials.owner_number = Some("919876543210".to_string());

        let result = ValidateTool::execute(&config).unwrap();
        assert_eq!(
            result_text(&result),
            "[LEGAL-SAHAYAK-MCP] Validation: 919876543210"
        );
    }

    #[test]
    fn test_validate_without_number_is_error() {
        let mut config = Config::default();
        config.credentials.owner_number = None;

        let err = ValidateTool::execute(&config).unwrap_err();
        assert!(matches!(err, ToolError::Internal(_)));
    }
}
