//! Encyclopedia fetcher backed by the MediaWiki API
//!
//! The opensearch action returns four parallel arrays
//! (`[query, titles, descriptions, urls]`). Entries whose description is too
//! short get a second lookup for the article's intro extract.

use super::{Fetcher, fetch_text};
use crate::types::{AppError, Result, SearchResult, SourceKind};
use crate::utils::config::SearchConfig;
use async_trait::async_trait;
use serde_json::Value;

/// Descriptions shorter than this trigger an extract lookup
const SHORT_DESCRIPTION_CHARS: usize = 100;
/// Extracts are cut to this many characters
const EXTRACT_CHAR_BUDGET: usize = 250;

pub struct EncyclopediaFetcher {
    client: reqwest::Client,
    api_url: String,
}

/// One positional row of an opensearch response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenSearchEntry {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl EncyclopediaFetcher {
    pub fn new(client: reqwest::Client, config: &SearchConfig) -> Self {
        Self {
            client,
            api_url: config.encyclopedia_api_url.clone(),
        }
    }

    /// Zip the parallel arrays of an opensearch response positionally.
    ///
    /// The shortest of the three arrays bounds the output.
    pub fn parse_opensearch(value: &Value) -> Result<Vec<OpenSearchEntry>> {
        let column = |index: usize| -> Result<&Vec<Value>> {
            value
                .get(index)
                .and_then(Value::as_array)
                .ok_or_else(|| {
                    AppError::Parse(format!("opensearch response is missing array {}", index))
                })
        };

        let titles = column(1)?;
        let descriptions = column(2)?;
        let urls = column(3)?;

        Ok(titles
            .iter()
            .zip(descriptions)
            .zip(urls)
            .map(|((title, description), url)| OpenSearchEntry {
                title: title.as_str().unwrap_or_default().to_string(),
                description: description.as_str().unwrap_or_default().to_string(),
                url: url.as_str().unwrap_or_default().to_string(),
            })
            .collect())
    }

    /// Pull the first page's intro extract out of a `prop=extracts` response.
    pub fn parse_extract(value: &Value) -> Option<String> {
        value
            .get("query")?
            .get("pages")?
            .as_object()?
            .values()
            .next()?
            .get("extract")?
            .as_str()
            .map(str::to_string)
    }

    async fn fetch_extract(&self, title: &str) -> Result<Option<String>> {
        let request = self.client.get(&self.api_url).query(&[
            ("action", "query"),
            ("prop", "extracts"),
            ("exintro", ""),
            ("explaintext", ""),
            ("titles", title),
            ("format", "json"),
        ]);

        let body = fetch_text(request).await?;
        let value: Value = serde_json::from_str(&body)
            .map_err(|e| AppError::Parse(format!("Invalid extract response: {}", e)))?;
        Ok(Self::parse_extract(&value))
    }
}

/// Cut an extract to the character budget, marking the cut with an ellipsis.
pub fn truncate_extract(extract: &str) -> String {
    if extract.chars().count() > EXTRACT_CHAR_BUDGET {
        let cut: String = extract.chars().take(EXTRACT_CHAR_BUDGET).collect();
        format!("{}...", cut)
    } else {
        extract.to_string()
    }
}

#[async_trait]
impl Fetcher for EncyclopediaFetcher {
    fn source(&self) -> SourceKind {
        SourceKind::Encyclopedia
    }

    async fn try_fetch(&self, topic: &str, limit: usize) -> Result<Vec<SearchResult>> {
        let limit_param = limit.to_string();
        let request = self.client.get(&self.api_url).query(&[
            ("action", "opensearch"),
            ("search", topic),
            ("limit", limit_param.as_str()),
            ("namespace", "0"),
            ("format", "json"),
        ]);

        let body = fetch_text(request).await?;
        let value: Value = serde_json::from_str(&body)
            .map_err(|e| AppError::Parse(format!("Invalid opensearch response: {}", e)))?;

        let mut results = Vec::new();
        for entry in Self::parse_opensearch(&value)? {
            let mut snippet = entry.description;

            if snippet.chars().count() < SHORT_DESCRIPTION_CHARS {
                match self.fetch_extract(&entry.title).await {
                    Ok(Some(extract)) => snippet = truncate_extract(&extract),
                    Ok(None) => {
                        tracing::debug!(title = %entry.title, "No extract available");
                    }
                    Err(e) => {
                        tracing::warn!(title = %entry.title, error = %e, "Extract lookup failed");
                    }
                }
            }

            results.push(SearchResult::new(
                entry.title,
                entry.url,
                snippet,
                SourceKind::Encyclopedia,
            ));
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_opensearch_zips_positionally() {
        let value = json!([
            "tesla",
            ["Tesla, Inc.", "Nikola Tesla", "Tesla (unit)"],
            ["American electric vehicle company", "Serbian-American inventor"],
            [
                "https://en.wikipedia.org/wiki/Tesla,_Inc.",
                "https://en.wikipedia.org/wiki/Nikola_Tesla",
                "https://en.wikipedia.org/wiki/Tesla_(unit)"
            ]
        ]);

        let entries = EncyclopediaFetcher::parse_opensearch(&value).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Tesla, Inc.");
        assert_eq!(entries[1].description, "Serbian-American inventor");
        assert_eq!(entries[1].url, "https://en.wikipedia.org/wiki/Nikola_Tesla");
    }

    #[test]
    fn test_parse_opensearch_rejects_malformed() {
        assert!(EncyclopediaFetcher::parse_opensearch(&json!({"error": "x"})).is_err());
        assert!(EncyclopediaFetcher::parse_opensearch(&json!(["q", []])).is_err());
    }

    #[test]
    fn test_parse_extract() {
        let value = json!({
            "query": {"pages": {"5533631": {"title": "Tesla, Inc.", "extract": "Tesla is a company."}}}
        });
        assert_eq!(
            EncyclopediaFetcher::parse_extract(&value),
            Some("Tesla is a company.".to_string())
        );

        let missing = json!({"query": {"pages": {"-1": {"title": "Nope", "missing": ""}}}});
        assert_eq!(EncyclopediaFetcher::parse_extract(&missing), None);
    }

    #[test]
    fn test_truncate_extract() {
        let short = "A short extract.";
        assert_eq!(truncate_extract(short), short);

        let long = "é".repeat(300);
        let truncated = truncate_extract(&long);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), EXTRACT_CHAR_BUDGET + 3);

        let exact = "x".repeat(EXTRACT_CHAR_BUDGET);
        assert_eq!(truncate_extract(&exact), exact);
    }
}
