//! Review Workflows
//!
//! The agent pipeline's collaboration is declarative: the nested review is a
//! fixed list of [`ReviewStep`]s, interpreted by [`NestedReview::run`], and the
//! opt-in live mode wraps it in a Writer/Critic exchange.
//!
//! # Usage
//!
//! ```ignore
//! let registry = AgentRegistry::build_pipeline(model);
//! let client = registry.model().create_client()?;
//! let outcome = ReviewConversation::new(&registry, client.as_ref())
//!     .run(&writer_prompt(&package))
//!     .await?;
//! println!("{}", outcome.to_markdown());
//! ```

pub mod conversation;
pub mod review;

pub use conversation::{ConversationOutcome, DEFAULT_MAX_TURNS, ReviewConversation};
pub use review::{
    META_INSTRUCTION, NestedReview, ReviewMessage, ReviewOutcome, ReviewRecord, ReviewStep,
    StepState, StepTrace, default_review_steps,
};
