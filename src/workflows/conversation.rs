//! Live Writer/Critic conversation
//!
//! The Critic opens with the writing task. Every Writer draft triggers the
//! nested review; the meta reviewer's answer becomes the Critic's reply. The
//! exchange runs for at most `max_turns` drafts and ends early when a message
//! satisfies its receiver's termination rule.

use super::review::ReviewOutcome;
use crate::agents::{AgentRegistry, AgentRole};
use crate::llm::LLMClient;
use crate::types::{Message, MessageRole, Result};
use serde::Serialize;

pub const DEFAULT_MAX_TURNS: usize = 2;

/// Transcript and review results of a finished conversation
#[derive(Debug, Clone, Serialize)]
pub struct ConversationOutcome {
    /// Messages in order, from the Writer's point of view (Critic = user)
    pub transcript: Vec<Message>,
    pub reviews: Vec<ReviewOutcome>,
    /// Whether a sentinel ended the exchange before the turn limit
    pub terminated: bool,
}

impl ConversationOutcome {
    /// Last draft the Writer produced
    pub fn final_draft(&self) -> Option<&str> {
        self.transcript
            .iter()
            .rev()
            .find(|message| message.role == MessageRole::Assistant)
            .map(|message| message.content.as_str())
    }

    /// Render the transcript as a markdown appendix
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("## Review Transcript\n");
        for message in &self.transcript {
            let speaker = message.name.as_deref().unwrap_or(message.role.as_str());
            out.push_str(&format!("\n### {}\n\n{}\n", speaker, message.content.trim()));
        }
        for (round, review) in self.reviews.iter().enumerate() {
            out.push_str(&format!("\n### Review round {}\n\n", round + 1));
            for trace in &review.traces {
                let record = &trace.record;
                let summary = if record.review.is_empty() {
                    "(no summary)"
                } else {
                    record.review.as_str()
                };
                out.push_str(&format!("- **{}**: {}\n", trace.reviewer.name(), summary));
            }
        }
        out
    }
}

pub struct ReviewConversation<'a> {
    registry: &'a AgentRegistry,
    client: &'a dyn LLMClient,
    max_turns: usize,
}

impl<'a> ReviewConversation<'a> {
    pub fn new(registry: &'a AgentRegistry, client: &'a dyn LLMClient) -> Self {
        Self {
            registry,
            client,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub async fn run(&self, task: &str) -> Result<ConversationOutcome> {
        let writer = self.registry.require(AgentRole::Writer)?;
        let critic = self.registry.require(AgentRole::Critic)?;
        let nested = self.registry.nested_review();

        let mut transcript = vec![critic_message(critic.name(), task)];
        let mut reviews = Vec::new();
        let mut terminated = false;

        for turn in 0..self.max_turns {
            let draft = writer.reply(self.client, &transcript).await?;
            transcript.push(Message::assistant(writer.name(), draft.clone()));
            tracing::info!(turn = turn + 1, chars = draft.len(), "Writer produced draft");

            if critic.is_termination_msg(&draft) {
                terminated = true;
                break;
            }

            let feedback = if nested.is_triggered_by(writer.role()) {
                let outcome = nested.run(self.registry, self.client, &draft).await?;
                let feedback = outcome.final_feedback.clone();
                reviews.push(outcome);
                feedback
            } else {
                critic.reply(self.client, &transcript).await?
            };

            transcript.push(critic_message(critic.name(), feedback.clone()));

            if writer.is_termination_msg(&feedback) {
                terminated = true;
                break;
            }
        }

        Ok(ConversationOutcome {
            transcript,
            reviews,
            terminated,
        })
    }
}

fn critic_message(name: &str, content: impl Into<String>) -> Message {
    Message {
        role: MessageRole::User,
        name: Some(name.to_string()),
        content: content.into(),
    }
}
