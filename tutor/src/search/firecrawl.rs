//! Firecrawl search backend (`POST /v1/search` with markdown scraping).

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{clean_markdown, SearchClient, SearchError, SearchResult, SEARCH_RESULT_LIMIT};

/// Default Firecrawl API base URL.
pub const DEFAULT_FIRECRAWL_API_URL: &str = "https://api.firecrawl.dev";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    data: Vec<SearchHit>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    markdown: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Web search through the Firecrawl API.
///
/// Each hit's markdown (or its description when no page content was scraped) is passed
/// through [`clean_markdown`].
pub struct FirecrawlSearch {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl FirecrawlSearch {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: base_url.into(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/v1/search", self.base_url.trim_end_matches('/'))
    }

    fn request_body(query: &str) -> serde_json::Value {
        json!({
            "query": query,
            "limit": SEARCH_RESULT_LIMIT,
            "scrapeOptions": { "formats": ["markdown"] }
        })
    }

    fn parse_response(body: &str) -> Result<Vec<SearchResult>, SearchError> {
        let parsed: SearchResponse = serde_json::from_str(body)
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;
        if parsed.success == Some(false) {
            return Err(SearchError::InvalidResponse(
                parsed.error.unwrap_or_else(|| "success=false".to_string()),
            ));
        }
        Ok(parsed
            .data
            .into_iter()
            .take(SEARCH_RESULT_LIMIT)
            .map(|hit| SearchResult {
                title: hit.title.unwrap_or_default(),
                url: hit.url.unwrap_or_default(),
                cleaned_text: clean_markdown(
                    hit.markdown
                        .as_deref()
                        .or(hit.description.as_deref())
                        .unwrap_or(""),
                ),
            })
            .collect())
    }
}

#[async_trait]
impl SearchClient for FirecrawlSearch {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| SearchError::NotConfigured("FIRECRAWL_API_KEY is not set".into()))?;
        let url = self.search_url();
        tracing::debug!(url = %url, query = %query, "firecrawl search");
        let res = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&Self::request_body(query))
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;
        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(SearchError::Api {
                status: status.as_u16(),
                body,
            });
        }
        let results = Self::parse_response(&body)?;
        tracing::debug!(count = results.len(), "firecrawl search results");
        Ok(results)
    }
}
