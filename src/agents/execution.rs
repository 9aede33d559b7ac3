//! Non-interactive execution proxy
//!
//! The proxy never asks a human for input. When it receives messages it scans
//! the most recent ones for fenced code blocks and runs them inside its
//! working directory, replying with the exit code and captured output.

use crate::types::{Message, Result};
use crate::utils::config::ExecutionConfig;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::LazyLock;
use tokio::process::Command;
use tokio::time::{Duration, timeout};

static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```([\w+-]*)[ \t]*\r?\n(.*?)```").expect("code block pattern is valid")
});

/// Interpreter a code block is run with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeLanguage {
    Shell,
    Python,
}

impl CodeLanguage {
    /// Map a fence label to a language; an empty label means shell.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "" | "sh" | "bash" | "shell" => Some(CodeLanguage::Shell),
            "python" | "py" => Some(CodeLanguage::Python),
            _ => None,
        }
    }

    fn program(&self) -> (&'static str, &'static str) {
        match self {
            CodeLanguage::Shell => ("sh", "-c"),
            CodeLanguage::Python => ("python3", "-c"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub label: String,
    pub code: String,
}

/// Result of running one code block
#[derive(Debug, Clone)]
pub struct ExecutionOutcome {
    pub exit_code: i32,
    pub output: String,
}

impl ExecutionOutcome {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Pull every fenced block out of a message body, in order.
pub fn extract_code_blocks(content: &str) -> Vec<CodeBlock> {
    CODE_BLOCK
        .captures_iter(content)
        .map(|caps| CodeBlock {
            label: caps
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
            code: caps
                .get(2)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        })
        .collect()
}

pub struct ExecutionProxy {
    work_dir: PathBuf,
    last_n_messages: usize,
    timeout: Duration,
}

impl ExecutionProxy {
    pub fn new(config: &ExecutionConfig) -> Self {
        Self {
            work_dir: config.work_dir.clone(),
            last_n_messages: config.last_n_messages,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Create the working directory if it does not exist yet.
    pub fn ensure_work_dir(&self) -> Result<()> {
        if !self.work_dir.exists() {
            std::fs::create_dir_all(&self.work_dir)?;
            tracing::info!(dir = %self.work_dir.display(), "Created code execution directory");
        }
        Ok(())
    }

    /// Code blocks found in the trailing window of the conversation.
    pub fn collect_blocks(&self, messages: &[Message]) -> Vec<CodeBlock> {
        let start = messages.len().saturating_sub(self.last_n_messages);
        messages[start..]
            .iter()
            .flat_map(|message| extract_code_blocks(&message.content))
            .collect()
    }

    /// Run one block with the interpreter matching its label.
    pub async fn execute(&self, block: &CodeBlock) -> Result<ExecutionOutcome> {
        let Some(language) = CodeLanguage::from_label(&block.label) else {
            return Ok(ExecutionOutcome {
                exit_code: 1,
                output: format!("unknown language {}", block.label),
            });
        };

        self.ensure_work_dir()?;

        let (program, flag) = language.program();
        let mut cmd = Command::new(program);
        cmd.arg(flag)
            .arg(&block.code)
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd.spawn()?;
        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(timeout_secs = self.timeout.as_secs(), "Code execution timed out");
                return Ok(ExecutionOutcome {
                    exit_code: 124,
                    output: format!("Timeout after {} seconds", self.timeout.as_secs()),
                });
            }
        };

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(ExecutionOutcome {
            exit_code: output.status.code().unwrap_or(-1),
            output: text,
        })
    }

    /// Execute the code in the recent messages and format a reply.
    ///
    /// Returns `None` when there is nothing to run. Execution stops at the
    /// first failing block.
    pub async fn generate_reply(&self, messages: &[Message]) -> Result<Option<String>> {
        let blocks = self.collect_blocks(messages);
        if blocks.is_empty() {
            return Ok(None);
        }

        let mut logs = String::new();
        let mut exit_code = 0;
        for block in &blocks {
            let outcome = self.execute(block).await?;
            logs.push_str(&outcome.output);
            exit_code = outcome.exit_code;
            if !outcome.succeeded() {
                break;
            }
        }

        let status = if exit_code == 0 {
            "execution succeeded"
        } else {
            "execution failed"
        };

        Ok(Some(format!(
            "exitcode: {} ({})\nCode output: {}",
            exit_code, status, logs
        )))
    }
}

impl Default for ExecutionProxy {
    fn default() -> Self {
        Self::new(&ExecutionConfig::default())
    }
}
