//! TOML-based configuration for Argus
//!
//! Every section has serde defaults, so an absent `argus.toml` yields a working
//! configuration. Secrets are never stored in the file: `[llm].api_key_env` names
//! the environment variable that holds the key.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Root configuration structure loaded from argus.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArgusConfig {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub llm: LlmConfig,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub execution: ExecutionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

// ============= Search Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Result count requested from the aggregator
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Per-request network timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Browser-like User-Agent sent to the scraped sites
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_web_base_url")]
    pub web_base_url: String,

    #[serde(default = "default_encyclopedia_api_url")]
    pub encyclopedia_api_url: String,

    #[serde(default = "default_news_base_url")]
    pub news_base_url: String,
}

fn default_max_results() -> usize {
    15
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}

fn default_web_base_url() -> String {
    "https://www.google.com".to_string()
}

fn default_encyclopedia_api_url() -> String {
    "https://en.wikipedia.org/w/api.php".to_string()
}

fn default_news_base_url() -> String {
    "https://news.google.com".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            web_base_url: default_web_base_url(),
            encyclopedia_api_url: default_encyclopedia_api_url(),
            news_base_url: default_news_base_url(),
        }
    }
}

// ============= LLM Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model identifier sent to the chat completions endpoint
    #[serde(default = "default_model")]
    pub model: String,

    /// OpenAI-compatible API base
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,

    /// Environment variable name containing the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_cache_seed")]
    pub cache_seed: u64,

    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_model() -> String {
    "llama3-8b-8192".to_string()
}

fn default_llm_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_api_key_env() -> String {
    "GROQ_API_KEY".to_string()
}

fn default_cache_seed() -> u64 {
    42
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_llm_base_url(),
            api_key_env: default_api_key_env(),
            cache_seed: default_cache_seed(),
            temperature: default_temperature(),
        }
    }
}

// ============= Report Configuration =============

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Pins phrase selection when set; unset keeps the varying prose
    #[serde(default)]
    pub seed: Option<u64>,
}

// ============= Execution Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Directory the execution proxy runs code in
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,

    /// How many trailing messages are scanned for code blocks
    #[serde(default = "default_last_n_messages")]
    pub last_n_messages: usize,

    #[serde(default = "default_execution_timeout")]
    pub timeout_secs: u64,
}

fn default_work_dir() -> PathBuf {
    PathBuf::from("coding")
}

fn default_last_n_messages() -> usize {
    3
}

fn default_execution_timeout() -> u64 {
    60
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            work_dir: default_work_dir(),
            last_n_messages: default_last_n_messages(),
            timeout_secs: default_execution_timeout(),
        }
    }
}

// ============= Output Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory exported files are written to
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            log_level: default_log_level(),
        }
    }
}

// ============= Configuration Loading & Validation =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Environment variable '{0}' referenced in config is not set")]
    MissingEnvVar(String),
}

impl ArgusConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::FileNotFound(missing)) => {
                debug!(path = %missing.display(), "No configuration file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ArgusConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.max_results == 0 {
            return Err(ConfigError::ValidationError(
                "search.max_results must be greater than zero".to_string(),
            ));
        }
        if self.search.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "search.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.execution.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "execution.timeout_secs must be greater than zero".to_string(),
            ));
        }

        for (field, value) in [
            ("search.web_base_url", &self.search.web_base_url),
            ("search.encyclopedia_api_url", &self.search.encyclopedia_api_url),
            ("search.news_base_url", &self.search.news_base_url),
            ("llm.base_url", &self.llm.base_url),
            ("llm.model", &self.llm.model),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }

        Ok(())
    }

    /// Resolve the LLM API key from the configured environment variable
    pub fn api_key(&self) -> Result<String, ConfigError> {
        std::env::var(&self.llm.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(self.llm.api_key_env.clone()))
    }
}
