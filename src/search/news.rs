//! News search fetcher
//!
//! Scrapes article blocks from a Google News style search page. Missing
//! snippets fall back to a fixed sentence; a publication time, when present,
//! is prefixed to the snippet.

use super::{Fetcher, element_text, fetch_text, selector};
use crate::types::{Result, SearchResult, SourceKind};
use crate::utils::config::SearchConfig;
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use scraper::Html;

const ARTICLE: &str = "article";
const TITLE_LINK: &str = "h3 a, h4 a";
const SNIPPET: &str = "p, span.HO8did";
const TIME: &str = "time";

/// Snippet used when an article block carries no summary text
pub const FALLBACK_SNIPPET: &str = "News article related to the search query.";

pub struct NewsFetcher {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl NewsFetcher {
    pub fn new(client: reqwest::Client, config: &SearchConfig) -> Self {
        Self {
            client,
            base_url: config.news_base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Parse the first `limit` article blocks; blocks without a title link are skipped.
    pub fn parse_articles(html: &str, limit: usize, base_url: &str) -> Result<Vec<SearchResult>> {
        let article_sel = selector(ARTICLE)?;
        let title_sel = selector(TITLE_LINK)?;
        let snippet_sel = selector(SNIPPET)?;
        let time_sel = selector(TIME)?;

        let document = Html::parse_document(html);
        let mut results = Vec::new();

        for article in document.select(&article_sel).take(limit) {
            let Some(title_el) = article.select(&title_sel).next() else {
                continue;
            };

            let href = title_el.value().attr("href").unwrap_or_default();
            let link = match href.strip_prefix('.') {
                Some(path) if href.starts_with("./") => format!("{}{}", base_url, path),
                _ => href.to_string(),
            };

            let mut snippet = article
                .select(&snippet_sel)
                .next()
                .map(element_text)
                .unwrap_or_else(|| FALLBACK_SNIPPET.to_string());

            if let Some(time_el) = article.select(&time_sel).next() {
                let stamp = time_el
                    .value()
                    .attr("datetime")
                    .filter(|value| !value.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| element_text(time_el));
                snippet = format!("{} - {}", stamp, snippet);
            }

            results.push(SearchResult::new(
                element_text(title_el),
                link,
                snippet,
                SourceKind::News,
            ));
        }

        Ok(results)
    }
}

#[async_trait]
impl Fetcher for NewsFetcher {
    fn source(&self) -> SourceKind {
        SourceKind::News
    }

    async fn try_fetch(&self, topic: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let request = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", topic), ("hl", "en-US"), ("gl", "US"), ("ceid", "US:en")])
            .header(USER_AGENT, &self.user_agent);

        let body = fetch_text(request).await?;
        Self::parse_articles(&body, limit, &self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://news.google.com";

    const PAGE: &str = r#"
<html><body>
  <article>
    <h3><a href="./articles/abc123?hl=en-US">Tesla deliveries beat estimates</a></h3>
    <p>Quarterly deliveries rose sharply.</p>
    <time datetime="2024-04-02T12:00:00Z">2 hours ago</time>
  </article>
  <article>
    <h4><a href="https://example.com/story">Markets open higher</a></h4>
  </article>
  <article>
    <span>No heading here</span>
  </article>
  <article>
    <h3><a href="./articles/zzz">Fourth</a></h3>
    <time>Yesterday</time>
  </article>
</body></html>
"#;

    #[test]
    fn test_parse_articles() {
        let results = NewsFetcher::parse_articles(PAGE, 10, BASE).unwrap();

        assert_eq!(results.len(), 3);

        assert_eq!(results[0].title, "Tesla deliveries beat estimates");
        assert_eq!(
            results[0].link,
            "https://news.google.com/articles/abc123?hl=en-US"
        );
        assert_eq!(
            results[0].snippet,
            "2024-04-02T12:00:00Z - Quarterly deliveries rose sharply."
        );
        assert_eq!(results[0].source, SourceKind::News);

        assert_eq!(results[1].link, "https://example.com/story");
        assert_eq!(results[1].snippet, FALLBACK_SNIPPET);

        assert_eq!(results[2].snippet, format!("Yesterday - {}", FALLBACK_SNIPPET));
    }

    #[test]
    fn test_limit_applies_to_article_blocks() {
        // The third block has no title, so only two of the first three survive
        let results = NewsFetcher::parse_articles(PAGE, 3, BASE).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_no_articles() {
        let results = NewsFetcher::parse_articles("<html></html>", 5, BASE).unwrap();
        assert!(results.is_empty());
    }
}
