//! Fetch-specific error types.

use thiserror::Error;

/// Errors that can occur while fetching or searching the web.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure (DNS, TLS, timeout, connection reset).
    #[error("Failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Transport succeeded but the response carried an error status.
    #[error("Failed to fetch {url} - status code {status}")]
    Status { url: String, status: u16 },

    /// The HTTP client could not be constructed (e.g. invalid user-agent).
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// Wrap a transport-level failure for the given URL.
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Record an error status code for the given URL.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_includes_code_and_url() {
        let err = FetchError::status("https://example.com/doc", 404);
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("https://example.com/doc"));
    }
}
