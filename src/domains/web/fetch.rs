//! Content Fetcher: retrieve a URL and normalize it to readable text.
//!
//! One outbound GET per call with a fixed timeout and user-agent,
//! redirects followed. HTML responses are reduced to markdown through the
//! readability pass; anything else is returned verbatim with a note.
//! Results are built fresh per call and never cached.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use super::error::FetchError;
use super::readability;
use crate::core::config::FetchConfig;

/// The outcome of a single fetch.
///
/// `text` is derived deterministically from the response body and content
/// type. `note` is `None` exactly when the body was simplified to markdown.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// Normalized markdown, or the raw body when normalization was skipped.
    pub text: String,

    /// Declared MIME type from the response headers (may be empty).
    pub content_type: String,

    /// Explanation when normalization was skipped or failed.
    pub note: Option<String>,
}

/// Stateless URL fetcher sharing one HTTP client across invocations.
#[derive(Debug)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher from the fetch configuration.
    ///
    /// Fails when the client cannot be built, e.g. a configured user-agent
    /// that is not a valid header value.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        // reqwest follows redirects by default (up to 10 hops).
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// Borrow the underlying HTTP client (shared with the search path).
    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Fetch a URL and normalize its content.
    ///
    /// `force_raw` bypasses HTML normalization and returns the body as-is.
    pub async fn fetch_url(&self, url: &str, force_raw: bool) -> Result<FetchResult, FetchError> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(FetchError::status(url, status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::transport(url, e))?;

        let is_html = content_type.contains("text/html");

        if is_html && !force_raw {
            return match readability::extract_article(&body) {
                Some(markdown) => {
                    info!("Simplified {} ({} chars of markdown)", url, markdown.len());
                    Ok(FetchResult {
                        text: markdown,
                        content_type,
                        note: None,
                    })
                }
                None => Ok(FetchResult {
                    text: body,
                    content_type,
                    note: Some(
                        "Could not extract readable content from the HTML page; \
                         here is the raw content:"
                            .to_string(),
                    ),
                }),
            };
        }

        Ok(FetchResult {
            text: body,
            note: Some(format!(
                "Content type {} cannot be simplified to markdown, \
                 but here is the raw content:",
                content_type
            )),
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serve a single canned HTTP response on an ephemeral port.
    async fn serve_once(status_line: &str, content_type: &str, body: &str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            content_type,
            body.len(),
            body
        );

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).await;
            stream.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{}", addr)
    }

    fn test_fetcher() -> Fetcher {
        Fetcher::new(&FetchConfig::default()).unwrap()
    }

    #[test]
    fn test_invalid_user_agent_fails_construction() {
        let config = FetchConfig {
            user_agent: "bad\nagent".to_string(),
            timeout_secs: 30,
        };
        let err = Fetcher::new(&config).unwrap_err();
        assert!(matches!(err, FetchError::Client(_)));
    }

    #[tokio::test]
    async fn test_fetch_html_is_simplified() {
        let url = serve_once(
            "200 OK",
            "text/html; charset=utf-8",
            "<html><body><article><h1>Act Text</h1><p>Section one.</p></article></body></html>",
        )
        .await;

        let result = test_fetcher().fetch_url(&url, false).await.unwrap();
        assert!(result.note.is_none());
        assert!(result.text.contains("# Act Text"));
        assert!(result.text.contains("Section one."));
        assert!(!result.text.contains('<'));
    }

    #[tokio::test]
    async fn test_fetch_non_html_returns_raw_with_note() {
        let body = "{\"act\": \"Indian Contract Act\"}";
        let url = serve_once("200 OK", "application/json", body).await;

        let result = test_fetcher().fetch_url(&url, false).await.unwrap();
        assert_eq!(result.text, body);
        assert!(result.note.is_some());
        assert!(result.note.unwrap().contains("application/json"));
    }

    #[tokio::test]
    async fn test_fetch_force_raw_skips_normalization() {
        let body = "<html><body><p>raw</p></body></html>";
        let url = serve_once("200 OK", "text/html", body).await;

        let result = test_fetcher().fetch_url(&url, true).await.unwrap();
        assert_eq!(result.text, body);
        assert!(result.note.is_some());
    }

    #[tokio::test]
    async fn test_fetch_extraction_failure_falls_back_to_raw() {
        let body = "<html><body><script>x()</script></body></html>";
        let url = serve_once("200 OK", "text/html", body).await;

        let result = test_fetcher().fetch_url(&url, false).await.unwrap();
        assert_eq!(result.text, body);
        assert!(result.note.is_some());
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let url = serve_once("404 Not Found", "text/html", "gone").await;

        let err = test_fetcher().fetch_url(&url, false).await.unwrap_err();
        match &err {
            FetchError::Status { status, .. } => assert_eq!(*status, 404),
            other => panic!("Expected status error, got {:?}", other),
        }
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains(&url));
    }

    #[tokio::test]
    async fn test_fetch_transport_error() {
        // Bind then drop a listener so the port is (almost certainly) closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}", addr);
        let err = test_fetcher().fetch_url(&url, false).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
