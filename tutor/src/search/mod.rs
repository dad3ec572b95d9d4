//! Web search collaborator: query in, up to five cleaned results out.
//!
//! [`SearchClient`] is the seam the `web_search_tool` depends on; [`FirecrawlSearch`] is the
//! real backend. Failures are typed here and turned into the [`SEARCH_ERROR_SENTINEL`]
//! string at the tool boundary.

mod clean;
mod firecrawl;

pub use clean::clean_markdown;
pub use firecrawl::{FirecrawlSearch, DEFAULT_FIRECRAWL_API_URL};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text returned by the search tool instead of results when the search fails.
pub const SEARCH_ERROR_SENTINEL: &str = "Error using tool.";

/// Maximum number of results requested per query.
pub const SEARCH_RESULT_LIMIT: usize = 5;

/// One search hit with its scraped content already cleaned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub cleaned_text: String,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search is not configured: {0}")]
    NotConfigured(String),
    #[error("search request failed: {0}")]
    Transport(String),
    #[error("search API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("unexpected search response: {0}")]
    InvalidResponse(String),
}

/// Search backend: one query, ordered results (at most [`SEARCH_RESULT_LIMIT`]).
#[async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_error_display_mentions_cause() {
        let e = SearchError::Api {
            status: 401,
            body: "unauthorized".into(),
        };
        let s = e.to_string();
        assert!(s.contains("401") && s.contains("unauthorized"), "{}", s);
        assert!(SearchError::NotConfigured("FIRECRAWL_API_KEY".into())
            .to_string()
            .contains("FIRECRAWL_API_KEY"));
    }
}
