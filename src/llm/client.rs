//! LLM client abstraction and model selection
//!
//! Agents only ever talk to an [`LLMClient`]. The production implementation is
//! the OpenAI-compatible chat client in [`super::openai`]; tests substitute a
//! mock.

use crate::types::{AppError, Message, Result};
use crate::utils::config::LlmConfig;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Generic LLM client trait for provider abstraction
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a reply to a conversation, optionally preceded by a system prompt
    async fn generate_with_history(
        &self,
        system: Option<&str>,
        messages: &[Message],
    ) -> Result<String>;

    /// Generate a reply to a single user prompt
    async fn generate_with_system(&self, system: Option<&str>, prompt: &str) -> Result<String> {
        self.generate_with_history(system, &[Message::user(prompt)])
            .await
    }

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}

/// The fixed set of models offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelChoice {
    #[default]
    GroqLlama3_8b,
    ClaudeHaiku,
    Mixtral,
    Llama3_70b,
}

impl ModelChoice {
    pub const ALL: [ModelChoice; 4] = [
        ModelChoice::GroqLlama3_8b,
        ModelChoice::ClaudeHaiku,
        ModelChoice::Mixtral,
        ModelChoice::Llama3_70b,
    ];

    /// Display label shown in model pickers
    pub fn label(&self) -> &'static str {
        match self {
            ModelChoice::GroqLlama3_8b => "Groq LLM-Groq",
            ModelChoice::ClaudeHaiku => "Anthropic Claude 3 Haiku",
            ModelChoice::Mixtral => "Mistral Large",
            ModelChoice::Llama3_70b => "Llama 3 70B",
        }
    }

    /// Identifier sent to the chat completions endpoint
    pub fn model_id(&self) -> &'static str {
        match self {
            ModelChoice::GroqLlama3_8b => "llama3-8b-8192",
            ModelChoice::ClaudeHaiku => "claude-3-haiku-20240307",
            ModelChoice::Mixtral => "mixtral-8x7b-32768",
            ModelChoice::Llama3_70b => "llama3-70b-8192",
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ModelChoice {
    type Err = String;

    /// Accepts either the model identifier or the display label (case-insensitive).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| {
                choice.model_id().eq_ignore_ascii_case(needle)
                    || choice.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|c| c.model_id()).collect();
                format!("unknown model '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

/// Model binding shared by every agent of one pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct ModelConfig {
    pub model: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub cache_seed: u64,
    pub temperature: f32,
}

impl ModelConfig {
    pub fn from_config(config: &LlmConfig, api_key: Option<String>) -> Self {
        Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cache_seed: config.cache_seed,
            temperature: config.temperature,
        }
    }

    pub fn with_model(mut self, choice: ModelChoice) -> Self {
        self.model = choice.model_id().to_string();
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Build a chat client for this configuration; requires a credential.
    pub fn create_client(&self) -> Result<Box<dyn LLMClient>> {
        let api_key = self
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::Configuration(format!(
                    "No API key configured for model '{}'",
                    self.model
                ))
            })?;

        Ok(Box::new(super::openai::OpenAIClient::new(
            api_key,
            self.base_url.clone(),
            self.model.clone(),
            self.temperature,
            self.cache_seed,
        )))
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::from_config(&LlmConfig::default(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_choices() {
        assert_eq!(ModelChoice::default().model_id(), "llama3-8b-8192");
        assert_eq!(ModelChoice::ClaudeHaiku.model_id(), "claude-3-haiku-20240307");
        assert_eq!(ModelChoice::Mixtral.label(), "Mistral Large");
        assert_eq!(ModelChoice::Llama3_70b.model_id(), "llama3-70b-8192");
    }

    #[test]
    fn test_model_choice_from_str() {
        assert_eq!(
            "mixtral-8x7b-32768".parse::<ModelChoice>().unwrap(),
            ModelChoice::Mixtral
        );
        assert_eq!(
            "llama 3 70b".parse::<ModelChoice>().unwrap(),
            ModelChoice::Llama3_70b
        );
        assert!("gpt-4".parse::<ModelChoice>().is_err());
    }

    #[test]
    fn test_create_client_requires_key() {
        let config = ModelConfig::default();
        assert!(!config.has_credential());
        assert!(config.create_client().is_err());

        let keyed = ModelConfig::from_config(&LlmConfig::default(), Some("gsk_test".into()))
            .with_model(ModelChoice::Llama3_70b);
        assert!(keyed.has_credential());
        let client = keyed.create_client().unwrap();
        assert_eq!(client.model_name(), "llama3-70b-8192");
    }

    #[test]
    fn test_api_key_not_serialized() {
        let config = ModelConfig::from_config(&LlmConfig::default(), Some("secret".into()));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
