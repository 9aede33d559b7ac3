//! Agent roles and termination rules

use super::prompts;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Token that ends a conversation when it appears in a message
pub const SENTINEL: &str = "TERMINATE";

/// Every role a pipeline instantiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgentRole {
    Researcher,
    Writer,
    Critic,
    LegalReviewer,
    ConsistencyReviewer,
    TextAlignmentReviewer,
    CompletionReviewer,
    MetaReviewer,
    Exporter,
    ExecutionProxy,
    TaskAssistant,
}

impl AgentRole {
    pub const ALL: [AgentRole; 11] = [
        AgentRole::TaskAssistant,
        AgentRole::Researcher,
        AgentRole::Writer,
        AgentRole::Critic,
        AgentRole::LegalReviewer,
        AgentRole::ConsistencyReviewer,
        AgentRole::TextAlignmentReviewer,
        AgentRole::CompletionReviewer,
        AgentRole::MetaReviewer,
        AgentRole::Exporter,
        AgentRole::ExecutionProxy,
    ];

    /// Name the agent uses in conversation transcripts
    pub fn name(&self) -> &'static str {
        match self {
            AgentRole::Researcher => "Researcher",
            AgentRole::Writer => "writer",
            AgentRole::Critic => "Critic",
            AgentRole::LegalReviewer => "Legal_Reviewer",
            AgentRole::ConsistencyReviewer => "Consistency_Reviewer",
            AgentRole::TextAlignmentReviewer => "Text_Alignment_Reviewer",
            AgentRole::CompletionReviewer => "Completion_Reviewer",
            AgentRole::MetaReviewer => "Meta_Reviewer",
            AgentRole::Exporter => "Exporter",
            AgentRole::ExecutionProxy => "User_Proxy",
            AgentRole::TaskAssistant => "Ai_task_assistant",
        }
    }

    /// Kebab-case identifier used on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            AgentRole::Researcher => "researcher",
            AgentRole::Writer => "writer",
            AgentRole::Critic => "critic",
            AgentRole::LegalReviewer => "legal-reviewer",
            AgentRole::ConsistencyReviewer => "consistency-reviewer",
            AgentRole::TextAlignmentReviewer => "text-alignment-reviewer",
            AgentRole::CompletionReviewer => "completion-reviewer",
            AgentRole::MetaReviewer => "meta-reviewer",
            AgentRole::Exporter => "exporter",
            AgentRole::ExecutionProxy => "execution-proxy",
            AgentRole::TaskAssistant => "task-assistant",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AgentRole::Researcher => "Gathers current information on the topic",
            AgentRole::Writer => "Drafts the report from the search results",
            AgentRole::Critic => "Critiques drafts and hosts the nested review",
            AgentRole::LegalReviewer => "Flags legal and compliance risks",
            AgentRole::ConsistencyReviewer => "Checks facts and figures for contradictions",
            AgentRole::TextAlignmentReviewer => "Checks prose against the numbers",
            AgentRole::CompletionReviewer => "Checks that required report elements exist",
            AgentRole::MetaReviewer => "Aggregates reviewer feedback into final suggestions",
            AgentRole::Exporter => "Saves the final report as markdown",
            AgentRole::ExecutionProxy => "Runs code blocks non-interactively in a sandbox",
            AgentRole::TaskAssistant => "General task assistant without a system prompt",
        }
    }

    /// Static instruction prompt; the task assistant and execution proxy have none
    pub fn system_prompt(&self) -> Option<&'static str> {
        match self {
            AgentRole::Researcher => Some(prompts::RESEARCHER),
            AgentRole::Writer => Some(prompts::WRITER),
            AgentRole::Critic => Some(prompts::CRITIC),
            AgentRole::LegalReviewer => Some(prompts::LEGAL_REVIEWER),
            AgentRole::ConsistencyReviewer => Some(prompts::CONSISTENCY_REVIEWER),
            AgentRole::TextAlignmentReviewer => Some(prompts::TEXT_ALIGNMENT_REVIEWER),
            AgentRole::CompletionReviewer => Some(prompts::COMPLETION_REVIEWER),
            AgentRole::MetaReviewer => Some(prompts::META_REVIEWER),
            AgentRole::Exporter => Some(prompts::EXPORTER),
            AgentRole::ExecutionProxy | AgentRole::TaskAssistant => None,
        }
    }

    pub fn termination(&self) -> Termination {
        match self {
            AgentRole::Critic => Termination::Contains(SENTINEL),
            AgentRole::ExecutionProxy => Termination::EndsWithTrimmed(SENTINEL),
            _ => Termination::Never,
        }
    }

    pub fn is_reviewer(&self) -> bool {
        matches!(
            self,
            AgentRole::LegalReviewer
                | AgentRole::ConsistencyReviewer
                | AgentRole::TextAlignmentReviewer
                | AgentRole::CompletionReviewer
                | AgentRole::MetaReviewer
        )
    }

    /// Whether the agent is backed by a language model
    pub fn uses_llm(&self) -> bool {
        !matches!(self, AgentRole::ExecutionProxy)
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AgentRole {
    type Err = String;

    /// Accepts the slug or the conversational name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|role| {
                role.slug().eq_ignore_ascii_case(needle) || role.name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| format!("unknown agent role '{}'", s))
    }
}

/// When a received message ends the conversation for an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Never,
    /// The token appears anywhere in the message
    Contains(&'static str),
    /// The message ends with the token once trailing whitespace is removed
    EndsWithTrimmed(&'static str),
}

impl Termination {
    pub fn is_terminal(&self, content: &str) -> bool {
        match self {
            Termination::Never => false,
            Termination::Contains(token) => content.contains(token),
            Termination::EndsWithTrimmed(token) => {
                !content.is_empty() && content.trim_end().ends_with(token)
            }
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Never => f.write_str("never"),
            Termination::Contains(token) => write!(f, "contains {}", token),
            Termination::EndsWithTrimmed(token) => write!(f, "ends with {}", token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_roles_unique() {
        let mut names: Vec<_> = AgentRole::ALL.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), AgentRole::ALL.len());
    }

    #[test]
    fn test_critic_terminates_on_contained_sentinel() {
        let rule = AgentRole::Critic.termination();
        assert!(rule.is_terminal("Looks good. TERMINATE now"));
        assert!(rule.is_terminal("TERMINATE"));
        assert!(!rule.is_terminal("Needs another pass."));
    }

    #[test]
    fn test_proxy_terminates_on_trailing_sentinel() {
        let rule = AgentRole::ExecutionProxy.termination();
        assert!(rule.is_terminal("All done. TERMINATE  \n"));
        assert!(!rule.is_terminal("TERMINATE but keep going"));
        assert!(!rule.is_terminal(""));
    }

    #[test]
    fn test_other_roles_never_terminate() {
        assert!(!AgentRole::Writer.termination().is_terminal("TERMINATE"));
        assert!(!AgentRole::MetaReviewer.termination().is_terminal("TERMINATE"));
    }

    #[test]
    fn test_parse_role() {
        assert_eq!("legal-reviewer".parse::<AgentRole>().unwrap(), AgentRole::LegalReviewer);
        assert_eq!("User_Proxy".parse::<AgentRole>().unwrap(), AgentRole::ExecutionProxy);
        assert_eq!("WRITER".parse::<AgentRole>().unwrap(), AgentRole::Writer);
        assert!("janitor".parse::<AgentRole>().is_err());
    }

    #[test]
    fn test_prompts() {
        assert!(AgentRole::TaskAssistant.system_prompt().is_none());
        assert!(AgentRole::ExecutionProxy.system_prompt().is_none());
        assert!(
            AgentRole::LegalReviewer
                .system_prompt()
                .is_some_and(|p| p.contains("3 bullet points"))
        );
    }
}
