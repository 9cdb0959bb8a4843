//! Shared helpers for the legal tools.
//!
//! Response formatting conventions: every tool response opens with the
//! `[LEGAL-SAHAYAK-MCP]` marker so callers can identify this server's
//! output, and advisory responses close with the standard disclaimer.

use rmcp::model::{CallToolResult, Content};

/// Identification marker prefixed to every tool response.
pub const RESPONSE_TAG: &str = "[LEGAL-SAHAYAK-MCP]";

/// Standard disclaimer appended to advisory responses.
pub const DISCLAIMER: &str = "**Disclaimer:** This information is for educational purposes only \
     and does not constitute legal advice. Please consult a qualified legal \
     practitioner for specific legal guidance.";

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Append a bulleted section to a response.
pub fn push_section(out: &mut String, title: &str, items: &[&str]) {
    out.push_str(&format!("**{}**\n", title));
    for item in items {
        out.push_str(&format!("- {}\n", item));
    }
    out.push('\n');
}

/// Capitalize each whitespace-separated word.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Human-readable form of an underscore_separated enum value.
pub fn humanize(s: &str) -> String {
    title_case(&s.replace('_', " "))
}

/// Char-boundary-safe preview of a document, with a trailing ellipsis
/// when truncated.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("employment law"), "Employment Law");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("posh"), "Posh");
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("supreme_court"), "Supreme Court");
        assert_eq!(humanize("all"), "All");
    }

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("short", 10), "short");
    }

    #[test]
    fn test_preview_truncates_with_ellipsis() {
        assert_eq!(preview("abcdefgh", 4), "abcd...");
    }

    #[test]
    fn test_preview_multibyte_safe() {
        // Must not panic on non-ASCII boundaries.
        let text = "धारा १२३ के अंतर्गत";
        let p = preview(text, 5);
        assert!(p.ends_with("..."));
    }

    #[test]
    fn test_push_section() {
        let mut out = String::new();
        push_section(&mut out, "Rights", &["one", "two"]);
        assert!(out.contains("**Rights**"));
        assert!(out.contains("- one\n"));
        assert!(out.contains("- two\n"));
    }
}
