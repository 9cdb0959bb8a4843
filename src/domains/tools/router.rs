//! Tool Router - builds the rmcp ToolRouter from registry.
//!
//! This module builds the ToolRouter for STDIO transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;
use crate::domains::web::Fetcher;

use super::definitions::{
    IndianLegalSearchTool, LegalConsultationTool, LegalDocumentAnalyzerTool,
    LegalPrecedentSearchTool, ValidateTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>, fetcher: Arc<Fetcher>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(LegalConsultationTool::create_route())
        .with_route(LegalDocumentAnalyzerTool::create_route(fetcher.clone()))
        .with_route(IndianLegalSearchTool::create_route(fetcher.clone()))
        .with_route(LegalPrecedentSearchTool::create_route(fetcher))
        .with_route(ValidateTool::create_route(config))
}
