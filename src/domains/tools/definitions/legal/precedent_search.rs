//! Legal precedent search tool.
//!
//! Builds a case-law query from the described facts, court level, and a
//! year range computed from the current date, runs one scoped web search
//! against Indian case-law sources, and renders the categorized results
//! with guidance on reading precedents.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::common::{DISCLAIMER, RESPONSE_TAG, humanize, push_section, success_result, title_case};
use crate::domains::tools::ToolError;
use crate::domains::web::Fetcher;

/// How many result links to request.
const RESULT_COUNT: usize = 10;

/// Parameters for the precedent search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LegalPrecedentSearchParams {
    /// Brief description of the legal issue or facts.
    #[schemars(
        description = "Brief description of the legal issue or facts for which precedents are needed"
    )]
    pub case_facts: String,

    /// Area of law, if known.
    #[schemars(description = "Area of law (employment, contract, criminal, family, property, etc.)")]
    #[serde(default)]
    pub legal_area: Option<String>,

    /// Court level filter.
    #[schemars(description = "Court level: supreme_court, high_court, district_court, or all")]
    #[serde(default = "default_court_level")]
    pub court_level: String,

    /// Time period filter.
    #[schemars(description = "Time period: recent (5 years), decade (10 years), or all_time")]
    #[serde(default = "default_time_period")]
    pub time_period: String,
}

fn default_court_level() -> String {
    "all".to_string()
}

fn default_time_period() -> String {
    "recent".to_string()
}

/// Legal precedent search tool implementation.
pub struct LegalPrecedentSearchTool;

impl LegalPrecedentSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "legal_precedent_search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Searches for legal precedents, case law, and court judgments relevant to specific legal issues in Indian courts. Use to find relevant case law, court judgments, and legal precedents that might apply to a user's legal situation.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(
        params: &LegalPrecedentSearchParams,
        fetcher: &Fetcher,
    ) -> Result<CallToolResult, ToolError> {
        let query = build_query(params, Utc::now().year());
        info!("Precedent search: {}", query);

        let links = fetcher.search_links(&query, RESULT_COUNT).await?;

        let mut response = format!(
            "**{}** **Legal Precedent Search Results**\n\n**Case Facts/Issue:** {}\n",
            RESPONSE_TAG, params.case_facts
        );

        if let Some(area) = &params.legal_area {
            response.push_str(&format!("**Legal Area:** {}\n", title_case(area)));
        }

        response.push_str(&format!(
            "**Court Level:** {}\n**Time Period:** {}\n\n",
            humanize(&params.court_level),
            humanize(&params.time_period)
        ));

        if links.is_empty() {
            push_section(
                &mut response,
                "No specific precedents found. Try:",
                &[
                    "Broadening your search terms",
                    "Searching for the specific legal provision or section",
                    "Looking for landmark cases in the legal area",
                    "Consulting legal databases directly",
                ],
            );
        } else {
            response.push_str("**Relevant Case Law & Precedents:**\n\n");
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
                "How to Use These Precedents:",
                &[
                    "Read the full judgment to understand the ratio decidendi (legal reasoning)",
                    "Check if the precedent is binding or persuasive for your case",
                    "Supreme Court judgments are binding on all lower courts",
                    "High Court judgments bind lower courts in the same state",
                    "Look for similar facts and legal issues in the cases",
                    "Note any subsequent amendments to relevant laws",
                ],
            );
            push_section(
                &mut response,
                "Understanding Legal Precedents:",
                &[
                    "**Ratio Decidendi:** The legal principle that forms the basis of the decision",
                    "**Obiter Dicta:** Observations that are not binding but persuasive",
                    "**Binding Precedent:** Must be followed by lower courts",
                    "**Persuasive Precedent:** May be considered but not mandatory",
                    "**Distinguishing:** Showing why a precedent doesn't apply to your case",
                ],
            );
        }

        if let Some(area) = &params.legal_area {
            Self::area_guidance(&mut response, &area.to_lowercase());
        }

        push_section(
            &mut response,
            "Recommended Legal Databases:",
            &[
                "**Indian Kanoon:** https://indiankanoon.org/ (Free case law database)",
                "**Supreme Court of India:** https://main.sci.gov.in/",
                "**SCC Online:** https://www.scconline.com/ (Subscription required)",
                "**Manupatra:** https://www.manupatra.com/ (Subscription required)",
            ],
        );

        response.push_str(DISCLAIMER);
        response.push('\n');

        Ok(success_result(response))
    }

    /// Area-specific pointers for the most common consultation areas.
    fn area_guidance(response: &mut String, area_lower: &str) {
        if ["employment", "labour", "bond"].contains(&area_lower) {
            push_section(
                response,
                "Key Employment Law Precedents to Consider:",
                &[
                    "Cases on validity of employment bonds",
                    "Restraint of trade doctrine applications",
                    "Industrial Disputes Act interpretations",
                    "Labour law compliance requirements",
                ],
            );
        } else if ["contract", "agreement"].contains(&area_lower) {
            push_section(
                response,
                "Key Contract Law Precedents to Consider:",
                &[
                    "Indian Contract Act 1872 interpretations",
                    "Breach of contract remedies",
                    "Specific performance cases",
                    "Unconscionable contract terms",
                ],
            );
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        fetcher: Arc<Fetcher>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: LegalPrecedentSearchParams = serde_json::from_value(arguments)
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
            input_schema: cached_schema_for_type::<LegalPrecedentSearchParams>(),
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
                let params: LegalPrecedentSearchParams =
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

/// Build the case-law search query.
///
/// `current_year` is passed in so the year-range terms are testable.
fn build_query(params: &LegalPrecedentSearchParams, current_year: i32) -> String {
    let mut terms: Vec<String> = vec![params.case_facts.clone()];

    if let Some(area) = &params.legal_area {
        terms.push(area.clone());
    }

    match params.court_level.as_str() {
        "supreme_court" => {
            terms.extend(["Supreme Court", "SC", "AIR", "SCC"].map(String::from));
        }
        "high_court" => {
            terms.extend(["High Court", "HC"].map(String::from));
        }
        "district_court" => {
            terms.extend(["District Court", "Sessions Court"].map(String::from));
        }
        _ => {}
    }

    terms.extend(["India", "judgment", "ruling", "precedent", "case law"].map(String::from));

    match params.time_period.as_str() {
        "recent" => terms.push(format!("{}..{}", current_year - 5, current_year)),
        "decade" => terms.push(format!("{}..{}", current_year - 10, current_year)),
        _ => {}
    }

    let mut query = terms.join(" ");
    query.push_str(
        " site:sci.gov.in OR site:indiankanoon.org OR site:manupatra.com OR site:scconline.com",
    );
    query
}

/// Label a result link by its case-law source.
fn categorize_link(link: &str) -> &'static str {
    let link_lower = link.to_lowercase();
    if link_lower.contains("sci.gov.in") {
        "Supreme Court Judgment"
    } else if link_lower.contains("indiankanoon.org") {
        "Indian Kanoon (Case Database)"
    } else if link_lower.contains("manupatra.com") {
        "Manupatra Legal Database"
    } else if link_lower.contains("scconline.com") {
        "SCC Online"
    } else if ["hc", "high", "court"].iter().any(|t| link_lower.contains(t)) {
        "High Court Judgment"
    } else {
        "Legal Precedent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(facts: &str) -> LegalPrecedentSearchParams {
        LegalPrecedentSearchParams {
            case_facts: facts.to_string(),
            legal_area: None,
            court_level: default_court_level(),
            time_period: default_time_period(),
        }
    }

    #[test]
    fn test_params_defaults() {
        let json = r#"{"case_facts": "employer enforcing a training bond"}"#;
        let p: LegalPrecedentSearchParams = serde_json::from_str(json).unwrap();
        assert_eq!(p.court_level, "all");
        assert_eq!(p.time_period, "recent");
    }

    #[test]
    fn test_build_query_recent_range() {
        let q = build_query(&params("bond enforcement"), 2026);
        assert!(q.contains("2021..2026"));
        assert!(q.contains("case law"));
        assert!(q.contains("site:indiankanoon.org"));
    }

    #[test]
    fn test_build_query_decade_range() {
        let mut p = params("bond enforcement");
        p.time_period = "decade".to_string();
        let q = build_query(&p, 2026);
        assert!(q.contains("2016..2026"));
    }

    #[test]
    fn test_build_query_all_time_has_no_range() {
        let mut p = params("bond enforcement");
        p.time_period = "all_time".to_string();
        let q = build_query(&p, 2026);
        assert!(!q.contains(".."));
    }

    #[test]
    fn test_build_query_supreme_court_terms() {
        let mut p = params("restraint of trade");
        p.court_level = "supreme_court".to_string();
        let q = build_query(&p, 2026);
        assert!(q.contains("Supreme Court"));
        assert!(q.contains("SCC"));
    }

    #[test]
    fn test_categorize_link() {
        assert_eq!(
            categorize_link("https://main.sci.gov.in/judgment/1"),
            "Supreme Court Judgment"
        );
        assert_eq!(
            categorize_link("https://indiankanoon.org/doc/42/"),
            "Indian Kanoon (Case Database)"
        );
        assert_eq!(
            categorize_link("https://www.scconline.com/case"),
            "SCC Online"
        );
        assert_eq!(
            categorize_link("https://bombayhighcourt.example/order"),
            "High Court Judgment"
        );
        assert_eq!(categorize_link("https://example.org/note"), "Legal Precedent");
    }
}
