//! Sequential multi-source aggregation
//!
//! Fetchers run one after another in priority order. Their records are
//! concatenated, deduplicated by link (first occurrence wins) and truncated
//! to the requested count.

use super::{
    EncyclopediaFetcher, Fetcher, NewsFetcher, WebSearchFetcher, build_http_client,
};
use crate::types::{Result, SearchResult};
use crate::utils::config::SearchConfig;
use std::collections::HashSet;
use std::sync::Arc;

/// How many records a fetcher is asked for, relative to the overall limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubLimit {
    /// `limit / 2`
    Half,
    /// `limit / 3`
    Third,
    /// A constant independent of the limit
    Fixed(usize),
}

impl SubLimit {
    pub fn resolve(self, limit: usize) -> usize {
        match self {
            SubLimit::Half => limit / 2,
            SubLimit::Third => limit / 3,
            SubLimit::Fixed(n) => n,
        }
    }
}

/// Ordered list of fetchers with their sub-limits
#[derive(Clone, Default)]
pub struct Aggregator {
    fetchers: Vec<(Arc<dyn Fetcher>, SubLimit)>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fetcher; registration order is priority order.
    pub fn with_fetcher(mut self, fetcher: Arc<dyn Fetcher>, sub_limit: SubLimit) -> Self {
        self.fetchers.push((fetcher, sub_limit));
        self
    }

    /// The standard source set: general web, encyclopedia, news.
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        let client = build_http_client(config)?;

        Ok(Self::new()
            .with_fetcher(
                Arc::new(WebSearchFetcher::new(client.clone(), config)),
                SubLimit::Half,
            )
            .with_fetcher(
                Arc::new(EncyclopediaFetcher::new(client.clone(), config)),
                SubLimit::Fixed(3),
            )
            .with_fetcher(Arc::new(NewsFetcher::new(client, config)), SubLimit::Third))
    }

    pub fn len(&self) -> usize {
        self.fetchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fetchers.is_empty()
    }

    /// Query every fetcher in order and merge the results.
    ///
    /// Never fails: a failing source contributes nothing.
    pub async fn aggregate(&self, topic: &str, limit: usize) -> Vec<SearchResult> {
        let mut combined = Vec::new();

        for (fetcher, sub_limit) in &self.fetchers {
            let n = sub_limit.resolve(limit);
            // A zero sub-limit sends no request at all, so with limit 1 the web source is skipped
            if n == 0 {
                tracing::debug!(source = fetcher.source().as_str(), "Sub-limit is zero, skipping");
                continue;
            }
            combined.extend(fetcher.fetch(topic, n).await);
        }

        let fetched = combined.len();
        let mut results = dedupe_by_link(combined);
        results.truncate(limit);

        tracing::info!(
            topic,
            fetched,
            kept = results.len(),
            "Aggregated search results"
        );

        results
    }
}

/// Drop every record whose link was already seen, preserving order.
pub fn dedupe_by_link(results: Vec<SearchResult>) -> Vec<SearchResult> {
    let mut seen = HashSet::new();
    results
        .into_iter()
        .filter(|result| seen.insert(result.link.clone()))
        .collect()
}
