use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============= Search Types =============

/// Which upstream source produced a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    GeneralWeb,
    Encyclopedia,
    News,
}

impl SourceKind {
    /// Human-facing label used in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::GeneralWeb => "Google Search",
            SourceKind::Encyclopedia => "Wikipedia",
            SourceKind::News => "News",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::GeneralWeb => "general-web",
            SourceKind::Encyclopedia => "encyclopedia",
            SourceKind::News => "news",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single normalized record produced by a fetcher.
///
/// `link` is the identity key within one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
    pub source: SourceKind,
}

impl SearchResult {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        snippet: impl Into<String>,
        source: SourceKind,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
            source,
        }
    }
}

/// One user-initiated search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub topic: String,
    pub requested_date: NaiveDate,
    pub max_results: usize,
}

impl SearchQuery {
    pub fn new(topic: impl Into<String>, requested_date: NaiveDate, max_results: usize) -> Self {
        Self {
            topic: topic.into(),
            requested_date,
            max_results,
        }
    }

    /// Date rendered the way reports and prompts expect it (`YYYY-MM-DD`).
    pub fn date_string(&self) -> String {
        self.requested_date.format("%Y-%m-%d").to_string()
    }
}

/// Output of `run_search`: the aggregated results plus the writing instructions
/// handed to the report stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPackage {
    pub topic: String,
    pub date: String,
    pub results: Vec<SearchResult>,
    pub instructions: String,
}

// ============= Conversation Types =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    /// Conversational name of the agent that produced the message, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            name: None,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            name: None,
            content: content.into(),
        }
    }

    pub fn assistant(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            name: Some(name.into()),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("LLM error: {0}")]
    LLM(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&SourceKind::GeneralWeb).unwrap();
        assert_eq!(json, "\"general-web\"");

        let back: SourceKind = serde_json::from_str("\"encyclopedia\"").unwrap();
        assert_eq!(back, SourceKind::Encyclopedia);
    }

    #[test]
    fn test_source_labels() {
        assert_eq!(SourceKind::GeneralWeb.to_string(), "Google Search");
        assert_eq!(SourceKind::Encyclopedia.label(), "Wikipedia");
        assert_eq!(SourceKind::News.as_str(), "news");
    }

    #[test]
    fn test_query_date_string() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let query = SearchQuery::new("Tesla stock", date, 15);
        assert_eq!(query.date_string(), "2024-03-09");
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Network("timed out".to_string());
        assert_eq!(err.to_string(), "Network error: timed out");
    }
}
