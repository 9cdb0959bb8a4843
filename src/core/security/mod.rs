//! Security utilities for the MCP server.
//!
//! Currently covers bearer-token authentication for the HTTP transport.

mod bearer;

pub use bearer::{AccessGrant, AuthError, BearerValidator};
