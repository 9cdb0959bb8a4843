//! Web domain: outbound fetch and scoped search.
//!
//! - `fetch` - the Content Fetcher (GET + readability normalization)
//! - `readability` - HTML to simplified-markdown extraction
//! - `search` - DuckDuckGo HTML results scraping
//! - `error` - fetch error types

mod error;
mod fetch;
pub mod readability;
pub mod search;

pub use error::FetchError;
pub use fetch::{FetchResult, Fetcher};
