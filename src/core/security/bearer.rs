//! Bearer token validation.
//!
//! The server accepts a single static token. A request either presents
//! exactly that token in an `Authorization: Bearer ...` header or is
//! rejected; there is no token issuance or expiry.

use thiserror::Error;

/// Client id granted to any caller holding the valid token.
const CLIENT_ID: &str = "puch-client";

/// Authentication failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No Authorization header, or one without a Bearer scheme.
    #[error("Missing or malformed Authorization header")]
    MissingCredentials,

    /// A Bearer token was presented but did not match.
    #[error("Invalid bearer token")]
    InvalidToken,
}

/// What an authenticated caller is allowed to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGrant {
    /// Identifier assigned to the authenticated client.
    pub client_id: String,

    /// Scopes granted to the client.
    pub scopes: Vec<String>,
}

/// Validates bearer tokens against the configured static token.
#[derive(Debug, Clone)]
pub struct BearerValidator {
    token: String,
}

impl BearerValidator {
    /// Create a validator for the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Authorize a request from its Authorization header value.
    ///
    /// `header` is the raw header value (e.g. `Bearer abc123`), or None
    /// when the header is absent.
    pub fn authorize(&self, header: Option<&str>) -> Result<AccessGrant, AuthError> {
        let header = header.ok_or(AuthError::MissingCredentials)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingCredentials)?;

        if token == self.token {
            Ok(AccessGrant {
                client_id: CLIENT_ID.to_string(),
                scopes: vec!["*".to_string()],
            })
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}
