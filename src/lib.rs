//! Legal Sahayak MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server offering
//! general legal-assistance tools for Indian law: consultations backed by a
//! static knowledge base, document analysis, statute search, and precedent
//! search.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   bearer-token security, transports, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools that can be executed by clients
//!   - **web**: Outbound content fetching, readability extraction, and
//!     web search
//!
//! # Example
//!
//! ```rust,no_run
//! use legal_sahayak_mcp::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
