//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::core::config::Config;
use crate::domains::web::Fetcher;

#[cfg(feature = "http")]
use super::ToolError;

use super::definitions::{
    IndianLegalSearchTool, LegalConsultationTool, LegalDocumentAnalyzerTool,
    LegalPrecedentSearchTool, ValidateTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    config: Arc<Config>,
    fetcher: Arc<Fetcher>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>, fetcher: Arc<Fetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            LegalConsultationTool::NAME,
            LegalDocumentAnalyzerTool::NAME,
            IndianLegalSearchTool::NAME,
            LegalPrecedentSearchTool::NAME,
            ValidateTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            LegalConsultationTool::to_tool(),
            LegalDocumentAnalyzerTool::to_tool(),
            IndianLegalSearchTool::to_tool(),
            LegalPrecedentSearchTool::to_tool(),
            ValidateTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools. The error kind
    /// is preserved so the transport can map validation failures and
    /// internal failures to their JSON-RPC codes.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            LegalConsultationTool::NAME => LegalConsultationTool::http_handler(arguments).await,
            LegalDocumentAnalyzerTool::NAME => {
                LegalDocumentAnalyzerTool::http_handler(arguments, self.fetcher.clone()).await
            }
            IndianLegalSearchTool::NAME => {
                IndianLegalSearchTool::http_handler(arguments, self.fetcher.clone()).await
            }
            LegalPrecedentSearchTool::NAME => {
                LegalPrecedentSearchTool::http_handler(arguments, self.fetcher.clone()).await
            }
            ValidateTool::NAME => ValidateTool::http_handler(arguments, self.config.clone()).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
