//! Legal document analyzer tool.
//!
//! Scans document text (inline or fetched from a URL) against the keyword
//! flag rules and renders critical issues, areas of concern, and fixed
//! review guidance. Inline text is validated before any fetch: a too-short
//! document is rejected without touching the network, even when a URL was
//! also supplied.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{DISCLAIMER, RESPONSE_TAG, preview, push_section, success_result, title_case};
use super::knowledge::evaluate_flags;
use crate::domains::tools::ToolError;
use crate::domains::web::Fetcher;

/// Minimum document length (trimmed chars) for meaningful analysis.
const MIN_DOCUMENT_CHARS: usize = 50;

/// Parameters for the document analyzer tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LegalDocumentAnalyzerParams {
    /// Full text content of the legal document to analyze.
    #[schemars(description = "Full text content of the legal document to analyze")]
    #[serde(default)]
    pub document_content: Option<String>,

    /// Type of document, if known.
    #[schemars(
        description = "Type of document (e.g., employment contract, bond, lease agreement, property deed, NDA)"
    )]
    #[serde(default)]
    pub document_type: Option<String>,

    /// Specific areas of concern or questions about the document.
    #[schemars(description = "Specific areas of concern or questions about the document")]
    #[serde(default)]
    pub specific_concerns: Option<String>,

    /// URL to fetch the document from when no inline text is provided.
    #[schemars(description = "URL to fetch document from if not provided as text")]
    #[serde(default)]
    pub document_url: Option<String>,
}

/// Legal document analyzer tool implementation.
pub struct LegalDocumentAnalyzerTool;

impl LegalDocumentAnalyzerTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "legal_document_analyzer";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Analyzes legal documents like employment contracts, bonds, agreements, property deeds, and other legal texts for potential issues under Indian law. Use when users provide legal documents or contracts for analysis, review, or interpretation.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(
        params: &LegalDocumentAnalyzerParams,
        fetcher: &Fetcher,
    ) -> Result<CallToolResult, ToolError> {
        let content = Self::resolve_content(params, fetcher).await?;
        info!("Analyzing document ({} chars)", content.len());

        let mut response = format!(
            "**{}** **Legal Document Analysis - Legal Sahayak**\n\n",
            RESPONSE_TAG
        );

        if let Some(doc_type) = &params.document_type {
            response.push_str(&format!("**Document Type:** {}\n\n", title_case(doc_type)));
        }

        if let Some(concerns) = &params.specific_concerns {
            response.push_str(&format!("**Specific Concerns:** {}\n\n", concerns));
        }

        response.push_str(&format!(
            "**Document Preview:**\n```\n{}\n```\n\n",
            preview(&content, 300)
        ));

        let content_lower = content.to_lowercase();
        let (critical, caution) = evaluate_flags(&content_lower);

        if !critical.is_empty() {
            push_section(&mut response, "Critical Issues Found:", &critical);
        }
        if !caution.is_empty() {
            push_section(&mut response, "Areas of Concern:", &caution);
        }

        response.push_str("**General Document Analysis:**\n\n");
        push_section(
            &mut response,
            "Key Clauses to Review:",
            &[
                "Payment/Compensation terms and timelines",
                "Termination conditions and notice periods",
                "Dispute resolution mechanism",
                "Governing law and jurisdiction",
                "Force majeure provisions",
                "Indemnity and liability clauses",
            ],
        );
        push_section(
            &mut response,
            "Indian Law Compliance Check:",
            &[
                "Ensure terms don't violate fundamental rights",
                "Check compliance with relevant labour laws",
                "Verify penalty clauses are reasonable and not penal",
                "Confirm consideration is adequate and legal",
                "Review for any unconscionable terms",
            ],
        );
        push_section(
            &mut response,
            "Recommended Actions:",
            &[
                "Get the document reviewed by a qualified lawyer",
                "Negotiate unfavorable terms before signing",
                "Keep copies of all versions and amendments",
                "Understand all implications before execution",
                "Consider legal insurance if available",
            ],
        );

        if let Some(concerns) = &params.specific_concerns {
            response.push_str(&format!(
                "**Regarding Your Specific Concerns:**\nBased on '{}', pay special attention to \
                 related clauses and seek specific legal advice on this matter.\n\n",
                concerns
            ));
        }

        response.push_str(DISCLAIMER);
        response.push('\n');

        Ok(success_result(response))
    }

    /// Resolve the document text, validating inline input before any fetch.
    async fn resolve_content(
        params: &LegalDocumentAnalyzerParams,
        fetcher: &Fetcher,
    ) -> Result<String, ToolError> {
        let inline = params
            .document_content
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let content = match inline {
            Some(text) => text.to_string(),
            None => match &params.document_url {
                Some(url) => fetcher.fetch_url(url, false).await?.text,
                None => {
                    return Err(ToolError::validation(
                        "Please provide document content (document_content or document_url).",
                    ));
                }
            },
        };

        if content.trim().chars().count() < MIN_DOCUMENT_CHARS {
            return Err(ToolError::validation(
                "Please provide document content with at least 50 characters for meaningful analysis.",
            ));
        }

        Ok(content)
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        fetcher: Arc<Fetcher>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: LegalDocumentAnalyzerParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::validation(format!("Invalid parameters: {}", e)))?;

        let result = Self::execute(&params, &fetcher).await?;

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
            input_schema: cached_schema_for_type::<LegalDocumentAnalyzerParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(fetcher: Arc<Fetcher>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let fetcher = fetcher.clone();
            async move {
                let params: LegalDocumentAnalyzerParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Self::execute(&params, &fetcher)
                    .await
                    .map_err(ToolError::into_mcp_error)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FetchConfig;
    use rmcp::model::RawContent;

    fn test_fetcher() -> Fetcher {
        Fetcher::new(&FetchConfig::default()).unwrap()
    }

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    fn bond_document() -> String {
        "This employment bond binds the employee for a service period of two years. \
         Breaking the bond attracts a penalty of two lakh rupees. \
         A non-compete restraint applies for one year after exit."
            .to_string()
    }

    #[tokio::test]
    async fn test_short_inline_content_is_validation_error() {
        let params = LegalDocumentAnalyzerParams {
            document_content: Some("too short".to_string()),
            document_type: None,
            specific_concerns: None,
            document_url: None,
        };

        let err = LegalDocumentAnalyzerTool::execute(&params, &test_fetcher())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Validation(_)));
    }

    #[tokio::test]
    async fn test_short_inline_content_skips_fetch_even_with_url() {
        // The URL points at a reserved address; reaching it would error as
        // a fetch failure, so a validation error proves no call was made.
        let params = LegalDocumentAnalyzerParams {
            document_content: Some("short text".to_string()),
            document_type: None,
            specific_concerns: None,
            document_url: Some("http://192.0.2.1/doc".to_string()),
        };

        let err = LegalDocumentAnalyzerTool::execute(&params, &test_fetcher())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_content_and_url_is_validation_error() {
        let params = LegalDocumentAnalyzerParams {
            document_content: None,
            document_type: None,
            specific_concerns: None,
            document_url: None,
        };

        let err = LegalDocumentAnalyzerTool::execute(&params, &test_fetcher())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Validation(_)));
    }

    #[tokio::test]
    async fn test_bond_document_raises_critical_flags() {
        let params = LegalDocumentAnalyzerParams {
            document_content: Some(bond_document()),
            document_type: Some("employment bond".to_string()),
            specific_concerns: None,
            document_url: None,
        };

        let result = LegalDocumentAnalyzerTool::execute(&params, &test_fetcher())
            .await
            .unwrap();
        let text = result_text(&result);
        assert!(text.contains("Critical Issues Found:"));
        assert!(text.contains("penalty clauses"));
        assert!(text.contains("restraint of trade"));
        assert!(text.contains("Document Type:** Employment Bond"));
    }

    #[tokio::test]
    async fn test_clean_document_has_no_flag_sections() {
        let params = LegalDocumentAnalyzerParams {
            document_content: Some(
                "A plain note describing the weather in Mumbai over fifty characters long, \
                 with no legal vocabulary at all."
                    .to_string(),
            ),
            document_type: None,
            specific_concerns: None,
            document_url: None,
        };

        let result = LegalDocumentAnalyzerTool::execute(&params, &test_fetcher())
            .await
            .unwrap();
        let text = result_text(&result);
        assert!(!text.contains("Critical Issues Found:"));
        assert!(!text.contains("Areas of Concern:"));
        assert!(text.contains("Key Clauses to Review:"));
    }

    #[tokio::test]
    async fn test_specific_concerns_are_echoed() {
        let params = LegalDocumentAnalyzerParams {
            document_content: Some(bond_document()),
            document_type: None,
            specific_concerns: Some("the penalty amount".to_string()),
            document_url: None,
        };

        let result = LegalDocumentAnalyzerTool::execute(&params, &test_fetcher())
            .await
            .unwrap();
        let text = result_text(&result);
        assert!(text.contains("Regarding Your Specific Concerns:"));
        assert!(text.contains("the penalty amount"));
    }

    #[test]
    fn test_params_all_optional() {
        let params: LegalDocumentAnalyzerParams = serde_json::from_str("{}").unwrap();
        assert!(params.document_content.is_none());
        assert!(params.document_url.is_none());
    }
}
