//! Agent Registry for the review pipeline
//!
//! [`AgentRegistry::build_pipeline`] instantiates one agent per [`AgentRole`],
//! all bound to the same model configuration, and wires the nested review the
//! Critic runs whenever the Writer produces a draft.
//!
//! Lookups work by role or by conversational name (`Legal_Reviewer`, ...).

use crate::agents::ConversableAgent;
use crate::agents::roles::AgentRole;
use crate::llm::ModelConfig;
use crate::types::{AppError, Result};
use crate::workflows::review::{NestedReview, ReviewStep};
use std::collections::HashMap;

/// Registry of instantiated agents plus the wired review sequence
pub struct AgentRegistry {
    agents: HashMap<AgentRole, ConversableAgent>,
    nested_review: NestedReview,
    model: ModelConfig,
}

impl AgentRegistry {
    /// Instantiate every role and wire the default nested review.
    pub fn build_pipeline(model: ModelConfig) -> Self {
        let registry = AgentRegistryBuilder::new(model)
            .with_roles(AgentRole::ALL)
            .build_unchecked();

        tracing::info!(
            agents = registry.len(),
            model = %registry.model.model,
            review_steps = registry.nested_review.steps().len(),
            "Built agent pipeline"
        );

        registry
    }

    pub fn builder(model: ModelConfig) -> AgentRegistryBuilder {
        AgentRegistryBuilder::new(model)
    }

    pub fn get(&self, role: AgentRole) -> Option<&ConversableAgent> {
        self.agents.get(&role)
    }

    /// Find an agent by its conversational name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Option<&ConversableAgent> {
        self.agents
            .values()
            .find(|agent| agent.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Like [`get`](Self::get), but a missing role is an error
    pub fn require(&self, role: AgentRole) -> Result<&ConversableAgent> {
        self.get(role).ok_or_else(|| {
            AppError::Configuration(format!("Agent '{}' is not registered", role.name()))
        })
    }

    pub fn contains(&self, role: AgentRole) -> bool {
        self.agents.contains_key(&role)
    }

    /// Roles from `required` that this registry lacks, in the given order
    pub fn missing_roles(&self, required: &[AgentRole]) -> Vec<AgentRole> {
        required
            .iter()
            .copied()
            .filter(|role| !self.contains(*role))
            .collect()
    }

    /// Agents in canonical role order
    pub fn agents(&self) -> impl Iterator<Item = &ConversableAgent> {
        AgentRole::ALL.iter().filter_map(|role| self.agents.get(role))
    }

    pub fn nested_review(&self) -> &NestedReview {
        &self.nested_review
    }

    pub fn model(&self) -> &ModelConfig {
        &self.model
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// Builder for creating an AgentRegistry with a subset of roles
pub struct AgentRegistryBuilder {
    model: ModelConfig,
    roles: Vec<AgentRole>,
    steps: Option<Vec<ReviewStep>>,
}

impl AgentRegistryBuilder {
    pub fn new(model: ModelConfig) -> Self {
        Self {
            model,
            roles: Vec::new(),
            steps: None,
        }
    }

    pub fn with_role(mut self, role: AgentRole) -> Self {
        if !self.roles.contains(&role) {
            self.roles.push(role);
        }
        self
    }

    pub fn with_roles(self, roles: impl IntoIterator<Item = AgentRole>) -> Self {
        roles.into_iter().fold(self, Self::with_role)
    }

    /// Replace the default review sequence
    pub fn with_review_steps(mut self, steps: Vec<ReviewStep>) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Build, rejecting review steps whose reviewer was not registered.
    pub fn build(self) -> Result<AgentRegistry> {
        let registry = self.build_unchecked();

        let reviewers: Vec<_> = registry
            .nested_review
            .steps()
            .iter()
            .map(|step| step.reviewer)
            .collect();
        let missing = registry.missing_roles(&reviewers);
        if !missing.is_empty() {
            let names: Vec<_> = missing.iter().map(|role| role.name()).collect();
            return Err(AppError::Configuration(format!(
                "Review steps reference unregistered agents: {}",
                names.join(", ")
            )));
        }

        Ok(registry)
    }

    /// Build without checking the review steps against the registered roles.
    ///
    /// Used for partial registries, e.g. to exercise missing-role handling.
    pub fn build_unchecked(self) -> AgentRegistry {
        let agents = self
            .roles
            .into_iter()
            .map(|role| (role, ConversableAgent::new(role, self.model.clone())))
            .collect();

        let nested_review = match self.steps {
            Some(steps) => NestedReview::new(steps),
            None => NestedReview::default(),
        };

        AgentRegistry {
            agents,
            nested_review,
            model: self.model,
        }
    }
}
