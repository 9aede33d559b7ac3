//! General web search fetcher
//!
//! Scrapes a Google-style results page. The selectors are fixed, so a markup
//! change upstream silently yields fewer (or zero) results.

use super::{Fetcher, element_text, fetch_text, selector};
use crate::types::{Result, SearchResult, SourceKind};
use crate::utils::config::SearchConfig;
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use scraper::Html;

const RESULT_BLOCK: &str = "div.g";
const TITLE: &str = "h3";
const LINK: &str = "a";
const SNIPPET: &str = "div.IsZvec";
const REDIRECT_PREFIX: &str = "/url?q=";

pub struct WebSearchFetcher {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl WebSearchFetcher {
    pub fn new(client: reqwest::Client, config: &SearchConfig) -> Self {
        Self {
            client,
            base_url: config.web_base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
        }
    }

    /// Parse a results page into at most `limit` records.
    ///
    /// Blocks missing a title, link or snippet element are skipped.
    pub fn parse_results(html: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let block_sel = selector(RESULT_BLOCK)?;
        let title_sel = selector(TITLE)?;
        let link_sel = selector(LINK)?;
        let snippet_sel = selector(SNIPPET)?;

        let document = Html::parse_document(html);
        let mut results = Vec::new();

        for block in document.select(&block_sel) {
            if results.len() >= limit {
                break;
            }

            let (Some(title), Some(link), Some(snippet)) = (
                block.select(&title_sel).next(),
                block.select(&link_sel).next(),
                block.select(&snippet_sel).next(),
            ) else {
                continue;
            };

            let href = link.value().attr("href").unwrap_or_default();

            results.push(SearchResult::new(
                element_text(title),
                unwrap_redirect(href),
                element_text(snippet),
                SourceKind::GeneralWeb,
            ));
        }

        Ok(results)
    }
}

/// Strip the results-page redirect wrapper (`/url?q=<target>&...`).
fn unwrap_redirect(href: &str) -> String {
    match href.strip_prefix(REDIRECT_PREFIX) {
        Some(rest) => rest.split('&').next().unwrap_or_default().to_string(),
        None => href.to_string(),
    }
}

#[async_trait]
impl Fetcher for WebSearchFetcher {
    fn source(&self) -> SourceKind {
        SourceKind::GeneralWeb
    }

    async fn try_fetch(&self, topic: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let request = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", topic)])
            .header(USER_AGENT, &self.user_agent);

        let body = fetch_text(request).await?;
        Self::parse_results(&body, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<html><body>
  <div class="g">
    <a href="/url?q=https://example.com/tesla&amp;sa=U&amp;ved=abc"><h3>Tesla shares rally</h3></a>
    <div class="IsZvec">Tesla stock climbed 5% on strong deliveries.</div>
  </div>
  <div class="g">
    <a href="https://example.org/ev"><h3>EV market outlook</h3></a>
    <div class="IsZvec">Analysts weigh the electric vehicle market.</div>
  </div>
  <div class="g">
    <a href="https://example.net/no-snippet"><h3>Missing snippet</h3></a>
  </div>
  <div class="g">
    <a href="https://example.com/third"><h3>Third result</h3></a>
    <div class="IsZvec">Another snippet.</div>
  </div>
</body></html>
"#;

    #[test]
    fn test_parse_results_extracts_complete_blocks() {
        let results = WebSearchFetcher::parse_results(PAGE, 10).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].title, "Tesla shares rally");
        assert_eq!(results[0].link, "https://example.com/tesla");
        assert_eq!(results[0].snippet, "Tesla stock climbed 5% on strong deliveries.");
        assert_eq!(results[0].source, SourceKind::GeneralWeb);
        assert_eq!(results[1].link, "https://example.org/ev");
        assert_eq!(results[2].title, "Third result");
    }

    #[test]
    fn test_parse_results_respects_limit() {
        let results = WebSearchFetcher::parse_results(PAGE, 1).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_unmatched_markup_yields_empty() {
        let results =
            WebSearchFetcher::parse_results("<html><body><p>captcha</p></body></html>", 5).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_unwrap_redirect() {
        assert_eq!(
            unwrap_redirect("/url?q=https://a.example/x&sa=U"),
            "https://a.example/x"
        );
        assert_eq!(unwrap_redirect("https://b.example/"), "https://b.example/");
        assert_eq!(unwrap_redirect(""), "");
    }
}
