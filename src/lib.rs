//! # Argus - multi-source search with a review pipeline
//!
//! Argus takes a search topic, collects results from a general web search,
//! an encyclopedia and a news search, wires up a fixed multi-agent review
//! pipeline, and writes a templated research report plus a canned chart.
//!
//! ## Overview
//!
//! Argus can be used in two ways:
//!
//! 1. **As a command-line tool** - Run the `argus` binary
//! 2. **As a library** - Import the search, report and pipeline components
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use argus::{Aggregator, ArgusConfig};
//! use rand::SeedableRng;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ArgusConfig::load_or_default("argus.toml")?;
//!     let aggregator = Aggregator::from_config(&config.search)?;
//!
//!     let results = aggregator.aggregate("Tesla stock", 15).await;
//!     let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!     let report = argus::report::synthesize("Tesla stock", "2026-01-02", &results, &mut rng);
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```
//!
//! ### Inspecting the pipeline
//!
//! ```rust,ignore
//! use argus::{AgentRegistry, ModelConfig};
//!
//! let registry = AgentRegistry::build_pipeline(ModelConfig::default());
//! for step in registry.nested_review().steps() {
//!     println!("{}", step.reviewer.name());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`search`] - Source fetchers and the aggregator
//! - [`agents`] - Agent roles, registry and the execution proxy
//! - [`llm`] - Chat completion client and model selection
//! - [`workflows`] - Nested review and the live Writer/Critic conversation
//! - [`report`] - Topic classification and the template report synthesizer
//! - [`chart`] - Canned per-domain chart data
//! - [`export`] - Report, results and chart files
//! - [`engine`] - Orchestration of the full search run
//! - [`types`] - Common types and error handling

#![warn(rustdoc::missing_crate_level_docs)]

/// Agent roles, registry and code execution.
pub mod agents;
/// Canned chart data per topic domain.
pub mod chart;
/// Command-line parsing and terminal output.
pub mod cli;
/// Search, report and review orchestration.
pub mod engine;
/// File export.
pub mod export;
/// LLM client and model configuration.
pub mod llm;
/// Template report synthesis.
pub mod report;
/// Multi-source web search.
pub mod search;
/// Caller-owned session state.
pub mod session;
/// Core types (search records, messages, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;
/// Review workflows over the agent pipeline.
pub mod workflows;

// Re-export commonly used types
pub use agents::{AgentRegistry, AgentRegistryBuilder, AgentRole};
pub use chart::{ChartSpec, create_chart};
pub use engine::{SearchEngine, generate_report, run_search};
pub use llm::{LLMClient, ModelChoice, ModelConfig};
pub use report::{TopicDomain, classify, synthesize};
pub use search::{Aggregator, Fetcher};
pub use session::SearchSession;
pub use types::{AppError, Result, SearchPackage, SearchQuery, SearchResult, SourceKind};
pub use utils::config::{ArgusConfig, ConfigError};
pub use workflows::{NestedReview, ReviewConversation, ReviewStep};
