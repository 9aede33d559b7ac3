//! Nested review sequence
//!
//! The review the Critic runs on every Writer draft is a static list of
//! [`ReviewStep`]s interpreted in order. Each step sends one message to its
//! reviewer, then asks the model to condense the exchange into a
//! [`ReviewRecord`]. A step that cannot be summarized still completes with the
//! default record.

use crate::agents::{AgentRegistry, AgentRole};
use crate::llm::LLMClient;
use crate::types::{AppError, Message, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Instant;

/// Instruction sent to the meta reviewer
pub const META_INSTRUCTION: &str =
    "Aggregate feedback from all reviewers and give final suggestions on the writing.";

/// What a step sends to its reviewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewMessage {
    /// "Review the following content." followed by the draft
    Reflection,
    /// A fixed instruction, with earlier summaries appended as context
    Instruction(&'static str),
}

impl ReviewMessage {
    pub fn render(&self, draft: &str, context: &[ReviewRecord]) -> String {
        match self {
            ReviewMessage::Reflection => format!("Review the following content.\n\n{}", draft),
            ReviewMessage::Instruction(text) if context.is_empty() => text.to_string(),
            ReviewMessage::Instruction(text) => {
                let carryover: Vec<String> = context
                    .iter()
                    .map(|record| {
                        serde_json::to_string(record).unwrap_or_else(|_| record.review.clone())
                    })
                    .collect();
                format!("{}\nContext: \n{}", text, carryover.join("\n"))
            }
        }
    }
}

/// One entry of the nested review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewStep {
    pub reviewer: AgentRole,
    pub max_turns: u32,
    pub message: ReviewMessage,
    /// Keys of the JSON summary requested from the model; empty means the
    /// reviewer's reply is taken verbatim
    pub summary_fields: Vec<&'static str>,
}

impl ReviewStep {
    /// A single-turn step summarized into `{reviewer, review}`
    pub fn reflection(reviewer: AgentRole, fields: [&'static str; 2]) -> Self {
        Self {
            reviewer,
            max_turns: 1,
            message: ReviewMessage::Reflection,
            summary_fields: fields.to_vec(),
        }
    }

    pub fn meta() -> Self {
        Self {
            reviewer: AgentRole::MetaReviewer,
            max_turns: 1,
            message: ReviewMessage::Instruction(META_INSTRUCTION),
            summary_fields: Vec::new(),
        }
    }

    /// Prompt asking for the JSON summary, e.g.
    /// `Return review into a JSON object only: {'reviewer': '', 'review': ''}.`
    pub fn summary_prompt(&self) -> Option<String> {
        if self.summary_fields.is_empty() {
            return None;
        }
        let shape: Vec<String> = self
            .summary_fields
            .iter()
            .map(|field| format!("'{}': ''", field))
            .collect();
        Some(format!(
            "Return review into a JSON object only: {{{}}}.",
            shape.join(", ")
        ))
    }
}

/// Legal, text alignment, consistency, completion, then meta.
pub fn default_review_steps() -> Vec<ReviewStep> {
    vec![
        ReviewStep::reflection(AgentRole::LegalReviewer, ["Reviewer", "Review"]),
        ReviewStep::reflection(AgentRole::TextAlignmentReviewer, ["reviewer", "review"]),
        ReviewStep::reflection(AgentRole::ConsistencyReviewer, ["reviewer", "review"]),
        ReviewStep::reflection(AgentRole::CompletionReviewer, ["reviewer", "review"]),
        ReviewStep::meta(),
    ]
}

/// Condensed output of one review step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub reviewer: String,
    pub review: String,
}

impl ReviewRecord {
    /// Parse a model's summary reply.
    ///
    /// Accepts code fences, surrounding prose, single-quoted pseudo-JSON and
    /// keys in any case.
    pub fn parse_lenient(text: &str) -> Result<Self> {
        let start = text.find('{');
        let end = text.rfind('}');
        let body = match (start, end) {
            (Some(start), Some(end)) if start < end => &text[start..=end],
            _ => {
                return Err(AppError::Parse(
                    "review summary contains no JSON object".to_string(),
                ));
            }
        };

        let object: Map<String, Value> = serde_json::from_str(body)
            .or_else(|_| serde_json::from_str(&body.replace('\'', "\"")))
            .map_err(|e| AppError::Parse(format!("invalid review summary: {}", e)))?;

        let field = |name: &str| {
            object
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
        };

        let reviewer = field("reviewer");
        let review = field("review");
        if reviewer.is_none() && review.is_none() {
            return Err(AppError::Parse(
                "review summary has neither 'reviewer' nor 'review'".to_string(),
            ));
        }

        Ok(Self {
            reviewer: reviewer.unwrap_or_default(),
            review: review.unwrap_or_default(),
        })
    }
}

/// Lifecycle of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Idle,
    Invoked,
    Summarized,
    Done,
}

/// What happened in one step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepTrace {
    pub reviewer: AgentRole,
    pub input: String,
    pub output: String,
    pub record: ReviewRecord,
    /// States visited, in order
    pub states: Vec<StepState>,
    /// Set when the summary fell back to the default record
    pub summary_error: Option<String>,
    pub timestamp: i64,
    pub duration_ms: u64,
}

impl StepTrace {
    pub fn state(&self) -> StepState {
        self.states.last().copied().unwrap_or(StepState::Idle)
    }
}

/// Output of one full nested review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub traces: Vec<StepTrace>,
    /// Final step's reply, used as the Critic's answer to the Writer
    pub final_feedback: String,
}

impl ReviewOutcome {
    pub fn records(&self) -> Vec<&ReviewRecord> {
        self.traces.iter().map(|trace| &trace.record).collect()
    }

    /// Reviewers in invocation order
    pub fn invocation_order(&self) -> Vec<AgentRole> {
        self.traces.iter().map(|trace| trace.reviewer).collect()
    }
}

/// The review sequence the Critic runs when triggered by the Writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedReview {
    owner: AgentRole,
    trigger: AgentRole,
    steps: Vec<ReviewStep>,
}

impl Default for NestedReview {
    fn default() -> Self {
        Self::new(default_review_steps())
    }
}

impl NestedReview {
    pub fn new(steps: Vec<ReviewStep>) -> Self {
        Self {
            owner: AgentRole::Critic,
            trigger: AgentRole::Writer,
            steps,
        }
    }

    pub fn owner(&self) -> AgentRole {
        self.owner
    }

    pub fn trigger(&self) -> AgentRole {
        self.trigger
    }

    pub fn steps(&self) -> &[ReviewStep] {
        &self.steps
    }

    /// Whether a message from `sender` starts this review
    pub fn is_triggered_by(&self, sender: AgentRole) -> bool {
        sender == self.trigger
    }

    /// Run every step in order against `draft`.
    ///
    /// A reviewer that fails to reply aborts the review; a failed summary does not.
    pub async fn run(
        &self,
        registry: &AgentRegistry,
        client: &dyn LLMClient,
        draft: &str,
    ) -> Result<ReviewOutcome> {
        let mut traces: Vec<StepTrace> = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let agent = registry.require(step.reviewer)?;
            let started = Instant::now();
            let timestamp = Utc::now().timestamp();
            let mut states = vec![StepState::Idle];

            let context: Vec<ReviewRecord> =
                traces.iter().map(|trace| trace.record.clone()).collect();
            let input = step.message.render(draft, &context);

            let mut conversation = vec![Message::user(input.clone())];
            let mut output = String::new();
            for _ in 0..step.max_turns.max(1) {
                output = agent.reply(client, &conversation).await?;
                conversation.push(Message::assistant(agent.name(), output.clone()));
            }
            states.push(StepState::Invoked);

            let (record, summary_error) = match step.summary_prompt() {
                Some(prompt) => {
                    conversation.push(Message::user(prompt));
                    let summary = client.generate_with_history(None, &conversation).await;
                    match summary.and_then(|text| ReviewRecord::parse_lenient(&text)) {
                        Ok(record) => (record, None),
                        Err(e) => {
                            tracing::warn!(
                                reviewer = agent.name(),
                                error = %e,
                                "Review summary failed, using empty record"
                            );
                            (ReviewRecord::default(), Some(e.to_string()))
                        }
                    }
                }
                None => (
                    ReviewRecord {
                        reviewer: agent.name().to_string(),
                        review: output.clone(),
                    },
                    None,
                ),
            };
            states.push(StepState::Summarized);
            states.push(StepState::Done);

            let duration_ms = started.elapsed().as_millis() as u64;
            tracing::info!(reviewer = agent.name(), duration_ms, "Review step complete");

            traces.push(StepTrace {
                reviewer: step.reviewer,
                input,
                output,
                record,
                states,
                summary_error,
                timestamp,
                duration_ms,
            });
        }

        let final_feedback = traces
            .last()
            .map(|trace| trace.output.clone())
            .unwrap_or_default();

        Ok(ReviewOutcome {
            traces,
            final_feedback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let order: Vec<_> = default_review_steps().iter().map(|s| s.reviewer).collect();
        assert_eq!(
            order,
            vec![
                AgentRole::LegalReviewer,
                AgentRole::TextAlignmentReviewer,
                AgentRole::ConsistencyReviewer,
                AgentRole::CompletionReviewer,
                AgentRole::MetaReviewer,
            ]
        );
        assert!(default_review_steps().iter().all(|s| s.max_turns == 1));
    }

    #[test]
    fn test_summary_prompts() {
        let steps = default_review_steps();
        assert_eq!(
            steps[0].summary_prompt().unwrap(),
            "Return review into a JSON object only: {'Reviewer': '', 'Review': ''}."
        );
        assert_eq!(
            steps[1].summary_prompt().unwrap(),
            "Return review into a JSON object only: {'reviewer': '', 'review': ''}."
        );
        assert!(steps[4].summary_prompt().is_none());
    }

    #[test]
    fn test_render_messages() {
        let reflection = ReviewMessage::Reflection.render("Draft text", &[]);
        assert_eq!(reflection, "Review the following content.\n\nDraft text");

        let meta = ReviewMessage::Instruction(META_INSTRUCTION);
        assert_eq!(meta.render("ignored", &[]), META_INSTRUCTION);

        let context = vec![ReviewRecord {
            reviewer: "Legal_Reviewer".into(),
            review: "Fine".into(),
        }];
        let rendered = meta.render("ignored", &context);
        assert!(rendered.starts_with(META_INSTRUCTION));
        assert!(rendered.contains("\"review\":\"Fine\""));
    }

    #[test]
    fn test_parse_strict_json() {
        let record =
            ReviewRecord::parse_lenient(r#"{"reviewer": "Legal", "review": "No issues"}"#).unwrap();
        assert_eq!(record.reviewer, "Legal");
        assert_eq!(record.review, "No issues");
    }

    #[test]
    fn test_parse_single_quotes_fences_and_case() {
        let text = "Here you go:\n```json\n{'Reviewer': 'Legal Reviewer', 'Review': 'Cite sources'}\n```";
        let record = ReviewRecord::parse_lenient(text).unwrap();
        assert_eq!(record.reviewer, "Legal Reviewer");
        assert_eq!(record.review, "Cite sources");
    }

    #[test]
    fn test_parse_failures() {
        assert!(ReviewRecord::parse_lenient("no json at all").is_err());
        assert!(ReviewRecord::parse_lenient("{not: valid, json}").is_err());
        assert!(ReviewRecord::parse_lenient(r#"{"score": 3}"#).is_err());
    }

    #[test]
    fn test_nested_review_wiring() {
        let nested = NestedReview::default();
        assert_eq!(nested.owner(), AgentRole::Critic);
        assert!(nested.is_triggered_by(AgentRole::Writer));
        assert!(!nested.is_triggered_by(AgentRole::Researcher));
    }
}
