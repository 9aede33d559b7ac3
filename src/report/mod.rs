//! Template Report Synthesizer
//!
//! Classifies a topic into a [`TopicDomain`], counts domain keywords in the
//! gathered results, and fills eleven prose sections from phrase variants
//! chosen by an injected random generator. The output is a markdown document
//! ending with the list of consulted sources.
//!
//! Prose varies between runs unless the caller passes a seeded generator:
//!
//! ```ignore
//! let mut rng = StdRng::seed_from_u64(7);
//! let markdown = synthesize("Tesla stock", "2026-01-02", &results, &mut rng);
//! ```

pub mod document;
pub mod domain;
pub(crate) mod phrases;
pub mod sections;
mod templates;

pub use document::{WRITING_INSTRUCTIONS, assemble, format_results, task_prompt, writer_prompt};
pub use domain::{KeywordCounts, TopicContext, TopicDomain, classify, top_terms};
pub use sections::{ReportSections, Section};

use crate::types::SearchResult;
use phrases::Phrases;
use rand::Rng;

/// A synthesized report with its intermediate pieces
#[derive(Debug, Clone)]
pub struct Report {
    pub domain: TopicDomain,
    pub sections: ReportSections,
    pub markdown: String,
}

/// Fill and assemble a report for `topic`.
pub fn compose<R: Rng>(topic: &str, date: &str, results: &[SearchResult], rng: &mut R) -> Report {
    let ctx = TopicContext::new(topic, results);
    let sections = templates::fill(&ctx, &mut Phrases::new(rng));
    let markdown = assemble(topic, date, results, &sections);

    tracing::info!(
        topic,
        domain = ctx.domain.as_str(),
        sources = results.len(),
        "Synthesized report"
    );

    Report {
        domain: ctx.domain,
        sections,
        markdown,
    }
}

/// Markdown report for `topic`.
pub fn synthesize<R: Rng>(topic: &str, date: &str, results: &[SearchResult], rng: &mut R) -> String {
    compose(topic, date, results, rng).markdown
}
