//! Mock implementations for testing.
//!
//! This module provides a mock LLM client that can be shared across test files
//! without duplication.

use argus::llm::LLMClient;
use argus::types::{AppError, Message, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

/// One recorded call to the mock
#[derive(Debug, Clone)]
pub struct MockCall {
    pub system: Option<String>,
    pub messages: Vec<Message>,
}

impl MockCall {
    pub fn last_message(&self) -> &str {
        self.messages
            .last()
            .map(|message| message.content.as_str())
            .unwrap_or_default()
    }
}

/// Mock LLM client with configurable responses.
///
/// Scripted responses are returned first, in order; after that every call
/// gets the default response. A `None` entry in the script fails that call.
///
/// # Examples
///
/// ```ignore
/// // Same answer every time
/// let client = MockLLMClient::new("Looks fine.");
///
/// // First call fails, then the default applies
/// let client = MockLLMClient::new("ok").with_script(vec![None]);
///
/// // Always fails
/// let client = MockLLMClient::failing();
/// ```
pub struct MockLLMClient {
    response: String,
    script: Mutex<VecDeque<Option<String>>>,
    should_fail: bool,
    calls: Mutex<Vec<MockCall>>,
}

impl MockLLMClient {
    /// Create a new mock client that returns the given response.
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            script: Mutex::new(VecDeque::new()),
            should_fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock client that always returns an error.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    /// Queue responses ahead of the default one.
    pub fn with_script(self, script: Vec<Option<&str>>) -> Self {
        *self.script.lock() = script
            .into_iter()
            .map(|entry| entry.map(str::to_string))
            .collect();
        self
    }

    /// Every call made so far
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().clone()
    }

    /// System prompts of the calls that carried one, in order
    pub fn system_prompts(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| call.system.clone())
            .collect()
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate_with_history(
        &self,
        system: Option<&str>,
        messages: &[Message],
    ) -> Result<String> {
        self.calls.lock().push(MockCall {
            system: system.map(str::to_string),
            messages: messages.to_vec(),
        });

        if self.should_fail {
            return Err(AppError::LLM("Mock LLM failure".to_string()));
        }

        match self.script.lock().pop_front() {
            Some(Some(response)) => Ok(response),
            Some(None) => Err(AppError::LLM("Scripted mock failure".to_string())),
            None => Ok(self.response.clone()),
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
