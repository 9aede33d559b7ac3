//! CLI module for Argus
//!
//! Command-line parsing for the `argus` binary. Uses clap for argument parsing
//! and owo-colors (via [`output::Output`]) for terminal output.

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Argus - multi-source search with a multi-agent review pipeline
#[derive(Parser, Debug)]
#[command(
    name = "argus",
    version,
    about = "Argus - multi-source web search and templated research reports",
    long_about = "Aggregates results from a general web search, an encyclopedia and a news\n\
                  search, builds the multi-agent review pipeline, and writes a templated\n\
                  research report with a companion chart.",
    after_help = "EXAMPLES:\n    \
                  argus search \"Tesla stock\"                # Report for today\n    \
                  argus search \"AI advancements\" --seed 7   # Reproducible prose\n    \
                  argus search \"covid vaccines\" --live-review\n    \
                  argus classify \"medieval castles\"         # Show the topic domain\n    \
                  argus agents list                         # Show the pipeline"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "argus.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search a topic and generate a report
    Search(SearchArgs),

    /// Inspect the agent pipeline
    #[command(subcommand)]
    Agents(AgentCommands),

    /// List the selectable language models
    Models,

    /// Show which domain template a topic maps to
    Classify {
        /// Topic to classify
        topic: String,
    },

    /// Show configuration information
    Config {
        /// Validate the configuration file and exit
        #[arg(long)]
        validate: bool,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct SearchArgs {
    /// Topic to search for
    pub topic: String,

    /// Report date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<chrono::NaiveDate>,

    /// Maximum number of results (overrides search.max_results)
    #[arg(short = 'n', long)]
    pub max_results: Option<usize>,

    /// Model id or label (see `argus models`)
    #[arg(short, long)]
    pub model: Option<String>,

    /// API key for the model endpoint (overrides the configured env var)
    #[arg(long, env = "ARGUS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Seed for phrase selection and chart data
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory for exported files (overrides output.dir)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Run the live Writer/Critic review and append its transcript
    #[arg(long)]
    pub live_review: bool,

    /// Skip writing report, results and chart files
    #[arg(long)]
    pub no_export: bool,
}

/// Agent inspection subcommands
#[derive(Subcommand, Debug)]
pub enum AgentCommands {
    /// List every agent in the pipeline
    List,

    /// Show details for one agent
    Show {
        /// Role slug or conversational name (e.g. `legal` or `Legal_Reviewer`)
        name: String,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
