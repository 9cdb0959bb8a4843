//! Indian legal search tool.
//!
//! Enhances the user's query with Indian-law context and a preference list
//! of official/legal-database sites, runs one scoped web search, and
//! renders the categorized links with usage guidance.

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

use super::common::{RESPONSE_TAG, humanize, push_section, success_result, title_case};
use crate::domains::tools::ToolError;
use crate::domains::web::Fetcher;

/// How many result links to request.
const RESULT_COUNT: usize = 8;

/// Parameters for the Indian legal search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct IndianLegalSearchParams {
    /// The legal search query.
    #[schemars(
        description = "Legal search query (e.g., 'Indian Contract Act 1872', 'POSH Act amendments', 'Supreme Court judgment on employment bonds')"
    )]
    pub search_query: String,

    /// Type of search: acts, judgments, amendments, or general.
    #[schemars(description = "Type of search: acts, judgments, amendments, or general")]
    #[serde(default = "default_search_type")]
    pub search_type: String,

    /// Jurisdiction filter.
    #[schemars(description = "Jurisdiction: supreme_court, high_court, district_court, or all")]
    #[serde(default = "default_jurisdiction")]
    pub jurisdiction: String,
}

fn default_search_type() -> String {
    "general".to_string()
}

fn default_jurisdiction() -> String {
    "all".to_string()
}

/// Indian legal search tool implementation.
pub struct IndianLegalSearchTool;

impl IndianLegalSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "indian_legal_search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Searches for information about Indian laws, acts, rules, amendments, and legal provisions using web search. Use to find specific information about Indian legal statutes, recent amendments, court judgments, or legal precedents.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(query = %params.search_query))]
    pub async fn execute(
        params: &IndianLegalSearchParams,
        fetcher: &Fetcher,
    ) -> Result<CallToolResult, ToolError> {
        let enhanced_query = build_query(params);
        info!("Legal search: {}", enhanced_query);

        let links = fetcher.search_links(&enhanced_query, RESULT_COUNT).await?;

        let mut response = format!(
            "**{}** **Indian Legal Search Results**\n\n\
             **Search Query:** {}\n\
             **Search Type:** {}\n\
             **Jurisdiction:** {}\n\n",
            RESPONSE_TAG,
            params.search_query,
            title_case(&params.search_type),
            humanize(&params.jurisdiction)
        );

        if links.is_empty() {
            push_section(
                &mut response,
                "No specific results found. Try:",
                &[
                    "Refining your search terms",
                    "Using official act names or section numbers",
                    "Searching for broader legal concepts first",
                    "Checking spelling of legal terms",
                ],
            );
        } else {
            response.push_str("**Relevant Legal Resources:**\n\n");
            for (i, link) in links.iter().enumerate() {
                response.push_str(&format!(
                    "{}. **{}:** {}\n",
                    i + 1,
                    categorize_link(link),
                    link
                ));
            }
            response.push('\n');

            push_section(
                &mut response,
                "How to Use These Resources:",
                &[
                    "Official government sites (.gov.in) provide authentic legal texts",
                    "Legal databases offer case law and commentary",
                    "Cross-reference information from multiple sources",
                    "Look for recent amendments and updates",
                    "Pay attention to court hierarchies and binding precedents",
                ],
            );
        }

        push_section(
            &mut response,
            "Recommended Legal Resources:",
            &[
                "**India Code:** https://www.indiacode.nic.in/ (Official legal database)",
                "**Supreme Court of India:** https://main.sci.gov.in/",
                "**Ministry of Law & Justice:** https://lawmin.gov.in/",
                "**Legislative Department:** https://legislative.gov.in/",
            ],
        );

        response.push_str(
            "**Note:** Always verify legal information from official government sources \
             and consult qualified legal practitioners for specific advice.\n",
        );

        Ok(success_result(response))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        fetcher: Arc<Fetcher>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: IndianLegalSearchParams = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<IndianLegalSearchParams>(),
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
                let params: IndianLegalSearchParams =
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

/// Build the enhanced search query for Indian legal context.
fn build_query(params: &IndianLegalSearchParams) -> String {
    let mut query = format!("{} Indian law", params.search_query);

    match params.search_type.as_str() {
        "acts" => query.push_str(" act statute legislation India"),
        "judgments" => query.push_str(" court judgment ruling India"),
        "amendments" => query.push_str(" amendment modification India"),
        _ => {}
    }

    if params.jurisdiction != "all" {
        query.push(' ');
        query.push_str(&params.jurisdiction.replace('_', " "));
    }

    query.push_str(
        " site:indiacode.nic.in OR site:sci.gov.in OR site:lawmin.gov.in \
         OR site:advocatekhoj.com OR site:manupatra.com",
    );

    query
}

/// Label a result link by its source domain.
fn categorize_link(link: &str) -> &'static str {
    if link.contains("indiacode.nic.in") {
        "Official Legislation"
    } else if link.contains("sci.gov.in") {
        "Supreme Court"
    } else if link.contains("lawmin.gov.in") {
        "Ministry of Law"
    } else if ["advocatekhoj.com", "manupatra.com", "scconline.com"]
        .iter()
        .any(|site| link.contains(site))
    {
        "Legal Database"
    } else {
        "Legal Resource"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: &str, search_type: &str, jurisdiction: &str) -> IndianLegalSearchParams {
        IndianLegalSearchParams {
            search_query: query.to_string(),
            search_type: search_type.to_string(),
            jurisdiction: jurisdiction.to_string(),
        }
    }

    #[test]
    fn test_params_defaults() {
        let json = r#"{"search_query": "Indian Contract Act 1872"}"#;
        let p: IndianLegalSearchParams = serde_json::from_str(json).unwrap();
        assert_eq!(p.search_type, "general");
        assert_eq!(p.jurisdiction, "all");
    }

    #[test]
    fn test_build_query_general() {
        let q = build_query(&params("POSH Act", "general", "all"));
        assert!(q.starts_with("POSH Act Indian law"));
        assert!(q.contains("site:indiacode.nic.in"));
        assert!(!q.contains("statute legislation"));
    }

    #[test]
    fn test_build_query_acts_with_jurisdiction() {
        let q = build_query(&params("employment bonds", "acts", "supreme_court"));
        assert!(q.contains("act statute legislation India"));
        assert!(q.contains("supreme court"));
    }

    #[test]
    fn test_build_query_judgments() {
        let q = build_query(&params("bond enforceability", "judgments", "all"));
        assert!(q.contains("court judgment ruling India"));
    }

    #[test]
    fn test_categorize_link() {
        assert_eq!(
            categorize_link("https://www.indiacode.nic.in/handle/123"),
            "Official Legislation"
        );
        assert_eq!(categorize_link("https://main.sci.gov.in/judgment"), "Supreme Court");
        assert_eq!(categorize_link("https://lawmin.gov.in/page"), "Ministry of Law");
        assert_eq!(
            categorize_link("https://www.manupatra.com/case"),
            "Legal Database"
        );
        assert_eq!(categorize_link("https://example.com/law"), "Legal Resource");
    }
}
