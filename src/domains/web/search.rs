//! Scoped web search via DuckDuckGo's HTML results page.
//!
//! One GET against the HTML endpoint (no API key), extracting raw hrefs
//! from `a.result__a` anchors. DDG wraps results in redirect URLs whose
//! `uddg=` parameter carries the percent-encoded target. No pagination,
//! retry, or deduplication; an empty result set is a legitimate outcome.

use scraper::{Html, Selector};
use tracing::{debug, info};

use super::error::FetchError;
use super::fetch::Fetcher;

const DDG_HTML_URL: &str = "https://html.duckduckgo.com/html/";

impl Fetcher {
    /// Search the web and return up to `num_results` result URLs.
    ///
    /// Links are returned as found, not fetched or followed. Zero matches
    /// yields an empty vector, never an error.
    pub async fn search_links(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<String>, FetchError> {
        debug!("Searching for: {}", query);

        let response = self
            .client()
            .get(DDG_HTML_URL)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| FetchError::transport(DDG_HTML_URL, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(DDG_HTML_URL, status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::transport(DDG_HTML_URL, e))?;

        let links = parse_result_links(&html, num_results);
        info!("Search returned {} link(s)", links.len());
        Ok(links)
    }
}

/// Extract result URLs from a DDG HTML results page.
///
/// Tied to one specific page structure: result anchors carry the
/// `result__a` class. A markup change upstream breaks only this function.
pub fn parse_result_links(html: &str, max_results: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("a.result__a") else {
        return Vec::new();
    };

    let mut links = Vec::new();
    for anchor in document.select(&selector) {
        if links.len() >= max_results {
            break;
        }
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let url = resolve_redirect(href);
        if url.contains("http") {
            links.push(url);
        }
    }

    links
}

/// Extract the target URL from DDG's redirect wrapper.
///
/// Redirect hrefs look like `//duckduckgo.com/l/?uddg=https%3A%2F%2F...&rut=...`;
/// direct http(s) hrefs pass through unchanged.
fn resolve_redirect(href: &str) -> String {
    if let Some(uddg_pos) = href.find("uddg=") {
        let start = uddg_pos + 5;
        let end = href[start..].find('&').map_or(href.len(), |i| start + i);
        percent_decode(&href[start..end])
    } else if href.starts_with("http") {
        href.to_string()
    } else {
        String::new()
    }
}

/// Minimal percent-decoding for redirect targets.
///
/// Escapes decode to raw bytes, not code points, so multi-byte UTF-8
/// sequences (e.g. Devanagari path segments) survive intact.
fn percent_decode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                bytes.push(byte);
            }
        } else if c == '+' {
            bytes.push(b' ');
        } else {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::FetchConfig;

    const SAMPLE_RESULTS: &str = r#"
    <html><body>
      <div class="result">
        <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Findiacode.nic.in%2Fact&rut=abc">India Code</a>
      </div>
      <div class="result">
        <a class="result__a" href="https://indiankanoon.org/doc/123/">Indian Kanoon</a>
      </div>
      <div class="result">
        <a class="result__snippet" href="https://example.com/ignored">snippet link</a>
      </div>
    </body></html>
    "#;

    #[test]
    fn test_parse_result_links() {
        let links = parse_result_links(SAMPLE_RESULTS, 10);
        assert_eq!(
            links,
            vec![
                "https://indiacode.nic.in/act".to_string(),
                "https://indiankanoon.org/doc/123/".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_result_links_respects_limit() {
        let links = parse_result_links(SAMPLE_RESULTS, 1);
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn test_parse_empty_page_returns_empty_vec() {
        assert!(parse_result_links("", 10).is_empty());
        assert!(parse_result_links("<html><body>no results</body></html>", 10).is_empty());
    }

    #[test]
    fn test_resolve_redirect() {
        let redirect = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=abc";
        assert_eq!(resolve_redirect(redirect), "https://example.com");
        assert_eq!(
            resolve_redirect("https://example.com"),
            "https://example.com"
        );
        assert_eq!(resolve_redirect("/relative/path"), "");
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(
            percent_decode("https%3A%2F%2Fexample.com"),
            "https://example.com"
        );
        assert_eq!(percent_decode("hello+world"), "hello world");
    }

    #[test]
    fn test_percent_decode_multibyte_utf8() {
        // %E0%A4%A7 is the UTF-8 encoding of Devanagari "ध".
        assert_eq!(
            percent_decode("https%3A%2F%2Fexample.com%2F%E0%A4%A7"),
            "https://example.com/ध"
        );
        assert_eq!(
            percent_decode("https%3A%2F%2Fexample.com%2F%E0%A4%A7%E0%A4%BE%E0%A4%B0%E0%A4%BE-12"),
            "https://example.com/धारा-12"
        );
    }

    // Live-network test (run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_search_links_live() {
        let fetcher = Fetcher::new(&FetchConfig::default()).unwrap();
        let links = fetcher
            .search_links("Indian Contract Act 1872", 3)
            .await
            .unwrap();
        assert!(links.len() <= 3);
    }
}
