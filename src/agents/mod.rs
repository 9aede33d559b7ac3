//! Conversational agents of the review pipeline
//!
//! Each [`AgentRole`] is instantiated as a [`ConversableAgent`]: a static
//! system prompt, a termination rule and the shared model configuration. The
//! LLM client is supplied per call, so a pipeline can be built and inspected
//! without credentials.

pub mod execution;
pub mod prompts;
pub mod registry;
pub mod roles;

use crate::llm::{LLMClient, ModelConfig};
use crate::types::{AppError, Message, Result};

pub use execution::{CodeBlock, ExecutionOutcome, ExecutionProxy, extract_code_blocks};
pub use registry::{AgentRegistry, AgentRegistryBuilder};
pub use roles::{AgentRole, SENTINEL, Termination};

/// A role bound to a model configuration
#[derive(Debug, Clone)]
pub struct ConversableAgent {
    role: AgentRole,
    model: ModelConfig,
}

impl ConversableAgent {
    pub fn new(role: AgentRole, model: ModelConfig) -> Self {
        Self { role, model }
    }

    pub fn role(&self) -> AgentRole {
        self.role
    }

    pub fn name(&self) -> &'static str {
        self.role.name()
    }

    pub fn system_prompt(&self) -> Option<&'static str> {
        self.role.system_prompt()
    }

    pub fn model(&self) -> &ModelConfig {
        &self.model
    }

    /// Whether a received message ends this agent's conversation
    pub fn is_termination_msg(&self, content: &str) -> bool {
        self.role.termination().is_terminal(content)
    }

    /// Ask the model for this agent's next message.
    pub async fn reply(&self, client: &dyn LLMClient, history: &[Message]) -> Result<String> {
        if !self.role.uses_llm() {
            return Err(AppError::InvalidInput(format!(
                "{} does not generate replies with a language model",
                self.name()
            )));
        }

        tracing::debug!(agent = self.name(), messages = history.len(), "Generating reply");
        client
            .generate_with_history(self.system_prompt(), history)
            .await
    }
}
