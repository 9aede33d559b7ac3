//! Multi-Source Web Search
//!
//! Each upstream source is wrapped in a [`Fetcher`]. Fetchers issue a single
//! request, parse the response with fixed selectors and return normalized
//! [`SearchResult`] records. A fetcher never fails outward: any network or
//! parse problem is logged and turned into an empty list.
//!
//! # Module Structure
//!
//! - [`web`] - General web search results page (HTML scraping)
//! - [`encyclopedia`] - Wikipedia opensearch API with extract lookups
//! - [`news`] - News search results page (HTML scraping)
//! - [`aggregator`] - Sequential fan-out, deduplication and truncation
//!
//! # Usage
//!
//! ```ignore
//! let aggregator = Aggregator::from_config(&config.search)?;
//! let results = aggregator.aggregate("Tesla stock price", 15).await;
//! for result in &results {
//!     println!("[{}] {} - {}", result.source, result.title, result.link);
//! }
//! ```

/// Sequential aggregation across fetchers.
pub mod aggregator;
/// Wikipedia-style encyclopedia fetcher.
pub mod encyclopedia;
/// News search fetcher.
pub mod news;
/// General web search fetcher.
pub mod web;

pub use aggregator::{Aggregator, SubLimit, dedupe_by_link};
pub use encyclopedia::EncyclopediaFetcher;
pub use news::NewsFetcher;
pub use web::WebSearchFetcher;

use crate::types::{AppError, Result, SearchResult, SourceKind};
use crate::utils::config::SearchConfig;
use async_trait::async_trait;
use scraper::Selector;
use std::time::Duration;

/// A single-source retrieval function returning normalized result records.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// The source this fetcher reports in its records
    fn source(&self) -> SourceKind;

    /// Fetch and parse, surfacing the failure cause
    async fn try_fetch(&self, topic: &str, limit: usize) -> Result<Vec<SearchResult>>;

    /// Fetch and parse, absorbing failures into an empty list
    async fn fetch(&self, topic: &str, limit: usize) -> Vec<SearchResult> {
        match self.try_fetch(topic, limit).await {
            Ok(results) => {
                tracing::info!(
                    source = self.source().as_str(),
                    count = results.len(),
                    "Fetched search results"
                );
                results
            }
            Err(e) => {
                tracing::warn!(
                    source = self.source().as_str(),
                    error = %e,
                    "Search source failed, continuing without its results"
                );
                Vec::new()
            }
        }
    }
}

/// Build the HTTP client shared by all fetchers of one aggregator.
pub fn build_http_client(config: &SearchConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(concat!("argus-search/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))
}

/// Send a request and return its body, treating non-2xx statuses as errors.
pub(crate) async fn fetch_text(request: reqwest::RequestBuilder) -> Result<String> {
    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?
        .error_for_status()
        .map_err(|e| AppError::Network(e.to_string()))?;

    response
        .text()
        .await
        .map_err(|e| AppError::Network(format!("Failed to read response body: {}", e)))
}

pub(crate) fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| AppError::Parse(format!("Invalid selector '{}': {:?}", css, e)))
}

pub(crate) fn element_text(element: scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
