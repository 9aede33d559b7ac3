//! Search → report → chart orchestration
//!
//! [`run_search`] and [`generate_report`] are the two stages the presentation
//! layer drives; [`SearchEngine`] bundles them with the optional live review
//! and the file export. Every failure past the fetchers surfaces once, at the
//! caller, as [`failure_message`].

use crate::agents::{AgentRegistry, AgentRole, ExecutionProxy};
use crate::chart::{ChartSpec, create_chart};
use crate::export::{ExportedFiles, Exporter};
use crate::llm::{LLMClient, ModelConfig};
use crate::report::{self, TopicDomain, WRITING_INSTRUCTIONS, writer_prompt};
use crate::search::Aggregator;
use crate::session::SearchSession;
use crate::types::{AppError, Result, SearchPackage, SearchQuery};
use crate::utils::config::ArgusConfig;
use crate::workflows::{ConversationOutcome, ReviewConversation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Report body returned when the pipeline lacks the roles the report needs
pub const MISSING_AGENTS_MESSAGE: &str = "Error: Required agents not found for report generation.";

/// Roles that must be registered before a report is produced
pub const REPORT_ROLES: [AgentRole; 2] = [AgentRole::Writer, AgentRole::ExecutionProxy];

/// Aggregate results for a query and attach the writing instructions.
pub async fn run_search(aggregator: &Aggregator, query: &SearchQuery) -> SearchPackage {
    let results = aggregator.aggregate(&query.topic, query.max_results).await;

    SearchPackage {
        topic: query.topic.clone(),
        date: query.date_string(),
        results,
        instructions: WRITING_INSTRUCTIONS.to_string(),
    }
}

/// Produce the canned template report for a package.
pub fn generate_report<R: Rng>(
    registry: &AgentRegistry,
    package: &SearchPackage,
    rng: &mut R,
) -> String {
    let missing = registry.missing_roles(&REPORT_ROLES);
    if !missing.is_empty() {
        tracing::warn!(missing = ?missing, "Report roles not registered");
        return MISSING_AGENTS_MESSAGE.to_string();
    }

    report::synthesize(&package.topic, &package.date, &package.results, rng)
}

/// Run the live Writer/Critic exchange over the package's writer prompt.
pub async fn review_report(
    registry: &AgentRegistry,
    client: &dyn LLMClient,
    package: &SearchPackage,
) -> Result<ConversationOutcome> {
    ReviewConversation::new(registry, client)
        .run(&writer_prompt(package))
        .await
}

/// User-facing text for an error caught at the top-level boundary
pub fn failure_message(error: &AppError) -> String {
    format!("An error occurred: {}", error)
}

/// Per-run switches
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Pin phrase selection and chart data
    pub seed: Option<u64>,
    pub live_review: bool,
    pub export: bool,
}

/// Everything one run produced
#[derive(Debug, Clone)]
pub struct SearchRun {
    pub domain: TopicDomain,
    pub result_count: usize,
    pub report: String,
    pub chart: ChartSpec,
    pub review: Option<ConversationOutcome>,
    pub files: ExportedFiles,
}

pub struct SearchEngine {
    aggregator: Aggregator,
    registry: AgentRegistry,
    proxy: ExecutionProxy,
    exporter: Exporter,
    client: Option<Box<dyn LLMClient>>,
}

impl SearchEngine {
    /// Standard fetchers and a full pipeline bound to `model`.
    pub fn new(config: &ArgusConfig, model: ModelConfig) -> Result<Self> {
        Ok(Self {
            aggregator: Aggregator::from_config(&config.search)?,
            registry: AgentRegistry::build_pipeline(model),
            proxy: ExecutionProxy::new(&config.execution),
            exporter: Exporter::new(&config.output.dir),
            client: None,
        })
    }

    pub fn with_aggregator(mut self, aggregator: Aggregator) -> Self {
        self.aggregator = aggregator;
        self
    }

    pub fn with_registry(mut self, registry: AgentRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Use this client for live review instead of building one from the model config.
    pub fn with_client(mut self, client: Box<dyn LLMClient>) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_exporter(mut self, exporter: Exporter) -> Self {
        self.exporter = exporter;
        self
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Search, report, chart and (optionally) review and export, recording
    /// the outcome in `session`.
    pub async fn run(
        &self,
        query: &SearchQuery,
        options: &RunOptions,
        session: &mut SearchSession,
    ) -> Result<SearchRun> {
        if query.topic.trim().is_empty() {
            return Err(AppError::InvalidInput("search topic is empty".to_string()));
        }

        let package = run_search(&self.aggregator, query).await;
        session.begin(package.clone());
        tracing::info!(
            topic = %package.topic,
            results = package.results.len(),
            "Search complete"
        );

        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let mut report = generate_report(&self.registry, &package, &mut rng);
        let chart = create_chart(&package.topic, &package.results, &mut rng);

        let review = if options.live_review {
            let outcome = self.live_review(&package).await?;
            report.push_str("\n\n");
            report.push_str(&outcome.to_markdown());
            if let Some(execution) = self.proxy.generate_reply(&outcome.transcript).await? {
                report.push_str(&format!("\n### Execution\n\n```\n{}\n```\n", execution));
            }
            Some(outcome)
        } else {
            None
        };

        let files = if options.export {
            self.exporter
                .write_all(&package, Some(&report), Some(&chart))?
        } else {
            ExportedFiles::default()
        };

        session.complete(report.clone(), chart.clone());

        Ok(SearchRun {
            domain: chart.domain,
            result_count: package.results.len(),
            report,
            chart,
            review,
            files,
        })
    }

    async fn live_review(&self, package: &SearchPackage) -> Result<ConversationOutcome> {
        match &self.client {
            Some(client) => review_report(&self.registry, client.as_ref(), package).await,
            None => {
                let client = self.registry.model().create_client()?;
                review_report(&self.registry, client.as_ref(), package).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::AgentRegistry;

    fn package() -> SearchPackage {
        SearchPackage {
            topic: "medieval castles".to_string(),
            date: "2026-01-02".to_string(),
            results: vec![],
            instructions: WRITING_INSTRUCTIONS.to_string(),
        }
    }

    #[test]
    fn test_missing_roles_yield_literal_message() {
        let registry = AgentRegistry::builder(ModelConfig::default())
            .with_role(AgentRole::Writer)
            .build_unchecked();
        let report = generate_report(&registry, &package(), &mut StdRng::seed_from_u64(1));
        assert_eq!(report, MISSING_AGENTS_MESSAGE);
    }

    #[test]
    fn test_full_pipeline_produces_report() {
        let registry = AgentRegistry::build_pipeline(ModelConfig::default());
        let report = generate_report(&registry, &package(), &mut StdRng::seed_from_u64(1));
        assert!(report.starts_with("# Comprehensive Research Report: medieval castles"));
    }

    #[test]
    fn test_failure_message() {
        let error = AppError::Network("connection refused".to_string());
        assert_eq!(
            failure_message(&error),
            "An error occurred: Network error: connection refused"
        );
    }
}
