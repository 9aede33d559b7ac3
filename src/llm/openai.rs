use crate::llm::client::LLMClient;
use crate::types::{AppError, Message, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Chat client for OpenAI-compatible `/chat/completions` endpoints (Groq, OpenAI, ...)
pub struct OpenAIClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
    temperature: f32,
    seed: u64,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    seed: u64,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAIClient {
    pub fn new(
        api_key: String,
        api_base: String,
        model: String,
        temperature: f32,
        seed: u64,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            model,
            temperature,
            seed,
        }
    }
}

#[async_trait]
impl LLMClient for OpenAIClient {
    async fn generate_with_history(
        &self,
        system: Option<&str>,
        messages: &[Message],
    ) -> Result<String> {
        let mut chat_messages = Vec::with_capacity(messages.len() + 1);
        if let Some(system) = system {
            chat_messages.push(ChatMessage {
                role: "system",
                content: system,
                name: None,
            });
        }
        chat_messages.extend(messages.iter().map(|message| ChatMessage {
            role: message.role.as_str(),
            content: &message.content,
            name: message.name.as_deref(),
        }));

        let body = ChatRequest {
            model: &self.model,
            messages: chat_messages,
            temperature: self.temperature,
            seed: self.seed,
            stream: false,
        };

        let url = format!("{}/chat/completions", self.api_base);
        tracing::debug!(url = %url, model = %self.model, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::LLM(format!("Request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::LLM(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(AppError::LLM(format!(
                "Chat completion returned {}: {}",
                status, text
            )));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| AppError::LLM(format!("Invalid chat completion response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::LLM("Chat completion contained no content".to_string()))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
