//! Legal consultation tool.
//!
//! Matches a free-text query against the static knowledge base and
//! assembles a templated guidance response. Pure text assembly; this tool
//! never touches the network.

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
use super::knowledge::{
    CONSUMER_KEYWORDS, CONSUMER_RIGHTS, EMPLOYMENT_BOND, EMPLOYMENT_BOND_KEYWORDS, POSH_ACT,
    POSH_KEYWORDS, contains_any,
};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for the legal consultation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LegalConsultationParams {
    /// The user's legal question or situation description.
    #[schemars(description = "The user's legal question or situation description")]
    pub legal_query: String,

    /// Specific area of law, if known.
    #[schemars(
        description = "Specific area of law (e.g., employment, criminal, family, property, consumer rights, POSH, contracts)"
    )]
    #[serde(default)]
    pub legal_area: Option<String>,

    /// Text of any legal document to review inline.
    #[schemars(description = "Text of any legal document to analyze (contract, bond, agreement, etc.)")]
    #[serde(default)]
    pub document_text: Option<String>,

    /// Urgency level: immediate, moderate, or general_inquiry.
    #[schemars(description = "Urgency level: immediate, moderate, or general_inquiry")]
    #[serde(default = "default_urgency")]
    pub urgency_level: String,
}

fn default_urgency() -> String {
    "general_inquiry".to_string()
}

/// Legal consultation tool implementation.
pub struct LegalConsultationTool;

impl LegalConsultationTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "legal_consultation";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Provides legal guidance and consultation for Indian law matters including employment bonds, POSH act, contracts, property disputes, criminal law, family law, and other legal issues. Use when users ask about legal issues, consequences of actions, rights and obligations under Indian law, or need clarification on legal matters.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(params: &LegalConsultationParams) -> CallToolResult {
        info!("Legal consultation requested");

        let mut response = format!(
            "**{}** **Legal Sahayak - Indian Legal Consultation**\n\n**Query:** {}\n\n",
            RESPONSE_TAG, params.legal_query
        );

        if let Some(area) = &params.legal_area {
            response.push_str(&format!("**Legal Area:** {}\n\n", title_case(area)));
        }

        if params.urgency_level == "immediate" {
            response.push_str(
                "**URGENT LEGAL MATTER** - Consider consulting a qualified lawyer immediately.\n\n",
            );
        }

        let query_lower = params.legal_query.to_lowercase();

        if contains_any(&query_lower, EMPLOYMENT_BOND_KEYWORDS) {
            Self::employment_bond_section(&mut response);
        } else if contains_any(&query_lower, POSH_KEYWORDS) {
            Self::posh_section(&mut response, &query_lower);
        } else if contains_any(&query_lower, CONSUMER_KEYWORDS) {
            Self::consumer_section(&mut response);
        }

        if let Some(document) = params.document_text.as_deref().filter(|d| !d.trim().is_empty()) {
            Self::document_section(&mut response, document);
        }

        push_section(
            &mut response,
            "General Recommendations:",
            &[
                "This is general legal information, not specific legal advice",
                "Consult a qualified lawyer for your specific situation",
                "Keep all relevant documents and communications",
                "Know your rights under Indian law",
                "Consider alternative dispute resolution methods",
            ],
        );

        response.push_str(DISCLAIMER);
        response.push('\n');

        success_result(response)
    }

    fn employment_bond_section(response: &mut String) {
        let info = &EMPLOYMENT_BOND;
        response.push_str("**Employment Bond Analysis:**\n\n");
        response.push_str(&format!("**What it means:** {}\n\n", info.description));
        push_section(
            response,
            "Potential consequences of breaking:",
            info.breaking_consequences,
        );
        push_section(response, "Possible legal defenses:", info.defenses);
        response.push_str(&format!(
            "**Relevant Laws:** {}\n\n",
            info.relevant_laws.join(", ")
        ));
    }

    fn posh_section(response: &mut String, query_lower: &str) {
        let info = &POSH_ACT;
        response.push_str("**POSH Act Analysis:**\n\n");
        response.push_str(&format!("**About POSH Act:** {}\n\n", info.description));

        if query_lower.contains("accused") {
            push_section(response, "Your rights if accused:", info.if_accused);
        } else if query_lower.contains("victim") || query_lower.contains("complaint") {
            push_section(response, "Your rights as a victim:", info.if_victim);
        } else {
            response.push_str("**General POSH Act provisions:**\n\n");
            push_section(response, "If you're accused:", info.if_accused);
            push_section(response, "If you're a victim:", info.if_victim);
        }

        response.push_str(&format!(
            "**Relevant Laws:** {}\n\n",
            info.relevant_laws.join(", ")
        ));
    }

    fn consumer_section(response: &mut String) {
        let info = &CONSUMER_RIGHTS;
        response.push_str("**Consumer Rights Analysis:**\n\n");
        response.push_str(&format!("**Consumer Protection:** {}\n\n", info.description));
        push_section(response, "Your rights as a consumer:", info.rights);
        push_section(response, "Available remedies:", info.remedies);
        response.push_str(&format!(
            "**Relevant Laws:** {}\n\n",
            info.relevant_laws.join(", ")
        ));
    }

    fn document_section(response: &mut String, document: &str) {
        response.push_str("**Document Analysis:**\n\n");
        response.push_str(&format!("```\n{}\n```\n\n", preview(document.trim(), 500)));
        push_section(
            response,
            "Key points to review:",
            &[
                "Check for unreasonable terms and conditions",
                "Verify penalty clauses are proportionate",
                "Ensure terms comply with Indian law",
                "Look for any unconscionable provisions",
                "Check if adequate consideration is provided",
            ],
        );
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(arguments: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        let params: LegalConsultationParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::validation(format!("Invalid parameters: {}", e)))?;

        let result = Self::execute(&params);

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
            input_schema: cached_schema_for_type::<LegalConsultationParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: LegalConsultationParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
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

    fn params(query: &str) -> LegalConsultationParams {
        LegalConsultationParams {
            legal_query: query.to_string(),
            legal_area: None,
            document_text: None,
            urgency_level: default_urgency(),
        }
    }

    #[test]
    fn test_params_default_urgency() {
        let json = r#"{"legal_query": "can I break my bond?"}"#;
        let p: LegalConsultationParams = serde_json::from_str(json).unwrap();
        assert_eq!(p.urgency_level, "general_inquiry");
        assert!(p.legal_area.is_none());
    }

    #[test]
    fn test_bond_query_selects_employment_section() {
        let result = LegalConsultationTool::execute(&params(
            "What happens if I break my employment bond?",
        ));
        let text = result_text(&result);
        assert!(text.contains("Employment Bond Analysis"));
        assert!(text.contains("Indian Contract Act 1872"));
        assert!(!text.contains("POSH Act Analysis"));
    }

    #[test]
    fn test_posh_accused_branch() {
        let result =
            LegalConsultationTool::execute(&params("I have been accused under the POSH act"));
        let text = result_text(&result);
        assert!(text.contains("Your rights if accused:"));
        assert!(!text.contains("Your rights as a victim:"));
    }

    #[test]
    fn test_posh_general_branch_lists_both_sides() {
        let result = LegalConsultationTool::execute(&params("tell me about the posh act"));
        let text = result_text(&result);
        assert!(text.contains("If you're accused:"));
        assert!(text.contains("If you're a victim:"));
    }

    #[test]
    fn test_consumer_query() {
        let result = LegalConsultationTool::execute(&params("I want a refund for a defective product"));
        let text = result_text(&result);
        assert!(text.contains("Consumer Rights Analysis"));
        assert!(text.contains("Consumer Protection Act 2019"));
    }

    #[test]
    fn test_unmatched_query_still_gets_recommendations() {
        let result = LegalConsultationTool::execute(&params("question about maritime law"));
        let text = result_text(&result);
        assert!(text.contains("General Recommendations:"));
        assert!(text.contains("Disclaimer:"));
        assert!(!text.contains("Analysis:**"));
    }

    #[test]
    fn test_urgent_matter_banner() {
        let mut p = params("bond question");
        p.urgency_level = "immediate".to_string();
        let result = LegalConsultationTool::execute(&p);
        assert!(result_text(&result).contains("URGENT LEGAL MATTER"));
    }

    #[test]
    fn test_document_text_is_previewed_and_truncated() {
        let mut p = params("contract question");
        p.document_text = Some("x".repeat(600));
        let result = LegalConsultationTool::execute(&p);
        let text = result_text(&result);
        assert!(text.contains("Document Analysis"));
        assert!(text.contains(&format!("{}...", "x".repeat(500))));
    }

    #[test]
    fn test_response_carries_identification_tag() {
        let result = LegalConsultationTool::execute(&params("any question"));
        assert!(result_text(&result).contains(RESPONSE_TAG));
    }
}
