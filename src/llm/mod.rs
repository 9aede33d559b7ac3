//! LLM Clients
//!
//! Agents talk to language models through the [`LLMClient`] trait. A single
//! OpenAI-compatible implementation covers every selectable model; the
//! endpoint and credential come from [`ModelConfig`].
//!
//! # Example
//!
//! ```ignore
//! use argus::llm::{ModelChoice, ModelConfig};
//!
//! let config = ModelConfig::from_config(&config.llm, config.api_key().ok())
//!     .with_model(ModelChoice::Llama3_70b);
//! let client = config.create_client()?;
//! let reply = client.generate_with_system(Some("Be terse."), "What is 2+2?").await?;
//! ```

/// Core LLM client trait and model selection.
pub mod client;
/// OpenAI-compatible chat completions client.
pub mod openai;

pub use client::{LLMClient, ModelChoice, ModelConfig};
pub use openai::OpenAIClient;
